use chrono::NaiveDate;
use thiserror::Error;

use super::{ScheduleRow, ScheduleTable, SHORT_DATE_FORMAT};

/// The column schedules date their rows by.
pub const DATE_COLUMN: &str = "Date";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("date {date} was not found in the schedule")]
pub struct DateNotFound {
    date: String,
}

impl DateNotFound {
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Finds the row whose `Date` cell matches the target date.
///
/// Cells are compared through the display coercion against the target
/// formatted as `MM/DD/YY`, the precision schedule files store. When several
/// rows carry the same date the first in table order wins; duplicate dates
/// are a data-quality issue upstream of this tool.
pub fn select_row(
    table: &ScheduleTable,
    target: NaiveDate,
) -> Result<&ScheduleRow, DateNotFound> {
    let wanted = target.format(SHORT_DATE_FORMAT).to_string();

    table
        .rows()
        .find(|row| {
            row.get(DATE_COLUMN)
                .is_some_and(|cell| cell.to_string().trim() == wanted)
        })
        .ok_or(DateNotFound { date: wanted })
}
