use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;

use super::{Cell, ScheduleRow};

/// Reads the first sheet of a spreadsheet workbook (ods, xlsx or xls — the
/// container is sniffed by calamine). The first row is the header row.
pub(super) fn load(path: &Path) -> anyhow::Result<Vec<ScheduleRow>> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names
        .first()
        .ok_or_else(|| anyhow::anyhow!("workbook has no sheets"))?
        .clone();

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut sheet_rows = range.rows();

    let header_row = sheet_rows
        .next()
        .ok_or_else(|| anyhow::anyhow!("sheet `{}` has no header row", sheet_name))?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let mut row = ScheduleRow::new();

        for (index, data) in sheet_row.iter().enumerate() {
            let Some(header) = headers.get(index).filter(|header| !header.is_empty()) else {
                continue;
            };

            if let Some(cell) = cell_from_data(data) {
                row.insert(header.clone(), cell);
            }
        }

        if row.is_empty() {
            continue;
        }

        rows.push(row);
    }

    Ok(rows)
}

fn cell_from_data(data: &Data) -> Option<Cell> {
    match data {
        Data::Empty | Data::Error(_) => None,
        Data::String(value) => {
            let value = value.trim();
            (!value.is_empty()).then(|| Cell::Text(value.to_string()))
        }
        Data::Float(value) => Some(Cell::Number(*value)),
        Data::Int(value) => Some(Cell::Number(*value as f64)),
        Data::Bool(value) => Some(Cell::Text(value.to_string())),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => Some(Cell::Date(datetime.date())),
            None => Some(Cell::Number(value.as_f64())),
        },
        Data::DateTimeIso(value) => Some(iso_date_cell(value)),
        Data::DurationIso(value) => Some(Cell::Text(value.clone())),
    }
}

// ods stores dates as iso strings, possibly with a time part
fn iso_date_cell(value: &str) -> Cell {
    value
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map_or_else(|| Cell::Text(value.to_string()), Cell::Date)
}
