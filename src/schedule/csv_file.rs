use std::path::Path;

use csv::ReaderBuilder;

use super::{Cell, ScheduleRow};

/// Reads a comma-separated schedule. The first record is the header row;
/// short records are tolerated and blank rows are skipped.
pub(super) fn load(path: &Path) -> anyhow::Result<Vec<ScheduleRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = ScheduleRow::new();

        for (index, value) in record.iter().enumerate() {
            let Some(header) = headers.get(index) else {
                continue;
            };

            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            row.insert(header.clone(), Cell::Text(value.to_string()));
        }

        if row.is_empty() {
            continue;
        }

        rows.push(row);
    }

    Ok(rows)
}
