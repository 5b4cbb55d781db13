use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use super::{Cell, ScheduleRow};

/// Reads a schedule stored as a json array of flat objects, one object per
/// row. Cell values must be scalar; nested arrays or objects are rejected.
pub(super) fn load(path: &Path) -> anyhow::Result<Vec<ScheduleRow>> {
    let value: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;

    let Value::Array(records) = value else {
        anyhow::bail!("expected a top-level array of records");
    };

    let mut rows = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let Value::Object(fields) = record else {
            anyhow::bail!("record {} is not an object", index);
        };

        let mut row = ScheduleRow::new();
        for (column, value) in fields {
            let cell = match value {
                Value::Null => continue,
                Value::String(text) => {
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    Cell::Text(text.to_string())
                }
                Value::Number(number) => Cell::Number(
                    number
                        .as_f64()
                        .ok_or_else(|| anyhow::anyhow!("unrepresentable number in `{}`", column))?,
                ),
                Value::Bool(value) => Cell::Text(value.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    anyhow::bail!("record {} has a non-scalar value in `{}`", index, column)
                }
            };

            row.insert(column, cell);
        }

        if row.is_empty() {
            continue;
        }

        rows.push(row);
    }

    Ok(rows)
}
