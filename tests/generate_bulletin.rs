//! Tests the full bulletin generation flow with raw-text outputs, where no
//! external converter is involved.

use std::fs;

use liturgist::config::Config;
use liturgist::generate_bulletin;
use liturgist::schedule::{DateNotFound, LoadError};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod common;

const TEMPLATE: &str = "<h1>{{DATE}}</h1>\n<p>{{HYMN_1}}</p>\n<p>{{BAPTISMS}}</p>\n";

#[test]
fn test_html_output_is_the_rendered_text_verbatim() {
    let dir = TempDir::new().unwrap();
    let schedule = common::write_file(dir.path(), "schedule.csv", common::SCHEDULE_CSV);
    let template = common::write_file(dir.path(), "bulletin.html", TEMPLATE);
    let output = dir.path().join("out/bulletin.html");

    let mut builder = Config::builder(&schedule);
    builder.date(common::june_first());
    builder.template(&template);
    builder.output(&output);
    let config = builder.build().unwrap();

    generate_bulletin(&config).expect("generation should succeed");

    // missing fields render as nothing, and the parent directory is created
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<h1>Sunday, June 01, 2025</h1>\n<p>Holy, Holy, Holy</p>\n<p></p>\n"
    );
}

#[test]
fn test_a_date_absent_from_the_schedule_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let schedule = common::write_file(dir.path(), "schedule.csv", common::SCHEDULE_CSV);
    let template = common::write_file(dir.path(), "bulletin.html", TEMPLATE);
    let output = dir.path().join("out/bulletin.html");

    let mut builder = Config::builder(&schedule);
    builder.date(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
    builder.template(&template);
    builder.output(&output);
    let config = builder.build().unwrap();

    let error = generate_bulletin(&config).unwrap_err();

    assert!(error.downcast_ref::<DateNotFound>().is_some());
    assert!(!output.exists());
}

#[test]
fn test_an_unsupported_schedule_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let schedule = common::write_file(dir.path(), "schedule.txt", common::SCHEDULE_CSV);
    let template = common::write_file(dir.path(), "bulletin.html", TEMPLATE);
    let output = dir.path().join("out/bulletin.html");

    let mut builder = Config::builder(&schedule);
    builder.date(common::june_first());
    builder.template(&template);
    builder.output(&output);
    let config = builder.build().unwrap();

    let error = generate_bulletin(&config).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<LoadError>(),
        Some(LoadError::UnsupportedFormat(_))
    ));
    assert!(!output.exists());
}
