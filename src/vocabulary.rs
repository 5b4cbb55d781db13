/// An ordered association list from schedule column names to the template
/// fields they populate. Constructed once and handed to the context builder
/// explicitly, so alternate vocabularies can be swapped in without touching
/// the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVocabulary {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldVocabulary {
    #[must_use]
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// The `(source column, template field)` pairs, in projection order.
    pub fn columns_to_fields(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.pairs.iter().copied()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The liturgical vocabulary. Adding a field means appending one pair.
pub const LITURGY: FieldVocabulary = FieldVocabulary::new(&[
    ("Hymn 1", "HYMN_1"),
    ("Hymn 2", "HYMN_2"),
    ("Hymn 3", "HYMN_3"),
    ("Hymn 4", "HYMN_4"),
    ("Hymn 5", "HYMN_5"),
    ("Hymn 6", "HYMN_6"),
    ("Hymn 7", "HYMN_7"),
    ("Scripture", "SCRIPTURE"),
    ("Prayer Verse", "PRAYER_VERSE"),
    ("Assurance Verse", "ASSURANCE_VERSE"),
    ("Catechism Question", "CATECHISM_QUESTION"),
    ("Catechism Answer", "CATECHISM_ANSWER"),
    ("Catechism Scripture References", "CATECHISM_SCRIPTURE"),
    ("Benediction", "BENEDICTION"),
    ("Benediction Scripture", "BENEDICTION_SCRIPTURE"),
    ("OT Reading", "OT_READING"),
    ("NT Reading", "NT_READING"),
    ("Baptisms", "BAPTISMS"),
]);
