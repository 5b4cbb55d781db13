use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

pub const SCHEDULE_CSV: &str = concat!(
    "Date,Hymn 1,Scripture\n",
    "05/25/25,Crown Him With Many Crowns,Romans 5:1\n",
    "06/01/25,\"Holy, Holy, Holy\",John 1:1\n",
    "06/08/25,Be Thou My Vision,Psalm 23\n",
);

#[must_use]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("fixture file should be writable");
    path
}

#[must_use]
pub fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("date should be valid")
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");
}
