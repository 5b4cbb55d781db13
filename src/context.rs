use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::schedule::ScheduleRow;
use crate::vocabulary::FieldVocabulary;

/// The context key holding the formatted target date. Always present.
pub const DATE_FIELD: &str = "DATE";

/// How the target date appears in rendered documents,
/// e.g. "Sunday, June 01, 2025".
pub const DISPLAY_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// The key-value set handed to the template renderer for one invocation.
/// Serializes as a single json object with keys in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    fields: IndexMap<String, String>,
}

impl RenderContext {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Projects a schedule row through a vocabulary into a rendering context.
///
/// `DATE` is always set from the target date. Vocabulary fields whose source
/// column is absent from the row are omitted entirely — templates render
/// nothing for a missing key — so this never fails, even for a row with no
/// recognized columns.
#[must_use]
pub fn build_context(
    row: &ScheduleRow,
    date: NaiveDate,
    vocabulary: &FieldVocabulary,
) -> RenderContext {
    let mut fields = IndexMap::with_capacity(vocabulary.len() + 1);

    fields.insert(
        DATE_FIELD.to_string(),
        date.format(DISPLAY_DATE_FORMAT).to_string(),
    );

    for (column, field) in vocabulary.columns_to_fields() {
        if let Some(cell) = row.get(column) {
            fields.insert(field.to_string(), cell.to_string());
        }
    }

    RenderContext { fields }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schedule::Cell;
    use crate::vocabulary::LITURGY;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn row(cells: Vec<(&str, Cell)>) -> ScheduleRow {
        cells
            .into_iter()
            .map(|(column, cell)| (column.to_string(), cell))
            .collect()
    }

    #[test]
    fn test_date_is_always_present_and_formatted() {
        let context = build_context(&ScheduleRow::new(), june_first(), &LITURGY);

        assert_eq!(context.get(DATE_FIELD), Some("Sunday, June 01, 2025"));
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn test_present_columns_are_projected_with_their_values() {
        let row = row(vec![
            ("Date", Cell::Text("06/01/25".into())),
            ("Hymn 1", Cell::Text("Holy, Holy, Holy".into())),
            ("Scripture", Cell::Text("John 1:1".into())),
        ]);

        let context = build_context(&row, june_first(), &LITURGY);

        assert_eq!(context.get("HYMN_1"), Some("Holy, Holy, Holy"));
        assert_eq!(context.get("SCRIPTURE"), Some("John 1:1"));
        // the raw Date column is not part of the vocabulary
        assert_eq!(context.len(), 3);
    }

    #[test]
    fn test_absent_columns_are_omitted_not_emptied() {
        let row = row(vec![("Hymn 1", Cell::Text("Abide With Me".into()))]);

        let context = build_context(&row, june_first(), &LITURGY);

        assert_eq!(context.get("HYMN_2"), None);
        assert_eq!(context.get("BAPTISMS"), None);
    }

    #[test]
    fn test_unrecognized_columns_are_ignored() {
        let row = row(vec![("Sermon Title", Cell::Text("On Hope".into()))]);

        let context = build_context(&row, june_first(), &LITURGY);

        assert_eq!(context.len(), 1);
    }

    #[test]
    fn test_fields_follow_vocabulary_order() {
        let row = row(vec![
            // deliberately out of vocabulary order
            ("Scripture", Cell::Text("John 1:1".into())),
            ("Hymn 1", Cell::Text("Holy, Holy, Holy".into())),
        ]);

        let context = build_context(&row, june_first(), &LITURGY);
        let fields: Vec<_> = context.fields().map(|(field, _)| field).collect();

        assert_eq!(fields, vec![DATE_FIELD, "HYMN_1", "SCRIPTURE"]);
    }

    #[test]
    fn test_serializes_as_a_single_ordered_object() {
        let row = row(vec![
            ("Hymn 1", Cell::Text("Holy, Holy, Holy".into())),
            ("Scripture", Cell::Text("John 1:1".into())),
        ]);

        let json = build_context(&row, june_first(), &LITURGY).to_json().unwrap();

        assert_eq!(
            json,
            r#"{"DATE":"Sunday, June 01, 2025","HYMN_1":"Holy, Holy, Holy","SCRIPTURE":"John 1:1"}"#
        );
    }

    #[test]
    fn test_every_vocabulary_pair_round_trips() {
        let row: ScheduleRow = LITURGY
            .columns_to_fields()
            .map(|(column, _)| (column.to_string(), Cell::Text(column.to_string())))
            .collect();

        let context = build_context(&row, june_first(), &LITURGY);

        assert_eq!(context.len(), LITURGY.len() + 1);
        for (column, field) in LITURGY.columns_to_fields() {
            assert_eq!(context.get(field), Some(column));
        }
    }
}
