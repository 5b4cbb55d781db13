use core::fmt;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use derive_more::Display;
use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

mod csv_file;
mod json_records;
mod select;
mod spreadsheet;

pub use select::{select_row, DateNotFound, DATE_COLUMN};

/// The format schedule files store dates in. Row matching and date-typed
/// cell coercion both use it, so the two can never drift apart.
pub const SHORT_DATE_FORMAT: &str = "%m/%d/%y";

/// A single cell of the schedule. Values are scalar; whatever richer types a
/// source format distinguishes are collapsed to these three at load.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            // spreadsheet parsers report whole numbers as floats,
            // which would otherwise render as "42.0"
            Self::Number(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{}", *value as i64)
            }
            Self::Number(value) => write!(f, "{}", value),
            Self::Date(value) => write!(f, "{}", value.format(SHORT_DATE_FORMAT)),
        }
    }
}

/// One schedule row: column name to cell value, in source column order.
/// Blank cells are absent rather than empty.
pub type ScheduleRow = IndexMap<String, Cell>;

/// All rows of a schedule file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleTable {
    rows: Vec<ScheduleRow>,
}

impl ScheduleTable {
    pub fn rows(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<ScheduleRow>> for ScheduleTable {
    fn from(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScheduleFormat {
    #[display("csv")]
    Csv,
    #[display("spreadsheet")]
    Spreadsheet,
    #[display("json")]
    Json,
}

impl ScheduleFormat {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "csv" => Some(Self::Csv),
            "ods" | "xlsx" | "xls" => Some(Self::Spreadsheet),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported schedule file type: `.{0}`")]
    UnsupportedFormat(String),
    #[error("failed to parse schedule `{path}`")]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Reads a schedule file into a table, dispatching on the file extension.
///
/// A missing `Date` column is not an error here; it surfaces later as
/// [`DateNotFound`] when a row is selected.
pub fn load(path: impl AsRef<Path>) -> Result<ScheduleTable, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let format = ScheduleFormat::from_extension(&extension)
        .ok_or_else(|| LoadError::UnsupportedFormat(extension))?;

    debug!("reading `{}` as a {} schedule", path.display(), format);

    let rows = match format {
        ScheduleFormat::Csv => csv_file::load(path),
        ScheduleFormat::Spreadsheet => spreadsheet::load(path),
        ScheduleFormat::Json => json_records::load(path),
    }
    .map_err(|source| LoadError::ParseFailure {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ScheduleTable::from(rows))
}
