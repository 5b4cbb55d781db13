use std::path::{Path, PathBuf};

use chrono::{Datelike, Days, Local, NaiveDate};
use thiserror::Error;

const DEFAULT_OUTPUT_FILE: &str = "output/out.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a template file (--template) or --print is required")]
pub struct MissingTemplate;

/// Everything one invocation needs: where the schedule lives, which date to
/// extract, and what to do with the selected data.
#[derive(Debug)]
pub struct Config {
    schedule: PathBuf,
    date: NaiveDate,
    template: Option<PathBuf>,
    print: bool,
    output: PathBuf,
    preserve_dir: Option<PathBuf>,
    weasyprint_path: Option<PathBuf>,
}

pub struct ConfigBuilder {
    schedule: PathBuf,
    date: Option<NaiveDate>,
    template: Option<PathBuf>,
    print: bool,
    output: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
    weasyprint_path: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new(schedule: impl Into<PathBuf>) -> Self {
        Self {
            schedule: schedule.into(),
            date: None,
            template: None,
            print: false,
            output: None,
            preserve_dir: None,
            weasyprint_path: None,
        }
    }

    pub fn date(&mut self, date: NaiveDate) -> &mut Self {
        self.date = Some(date);
        self
    }

    pub fn template(&mut self, template: impl Into<PathBuf>) -> &mut Self {
        self.template = Some(template.into());
        self
    }

    pub fn print(&mut self, print: bool) -> &mut Self {
        self.print = print;
        self
    }

    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    pub fn preserve_dir(&mut self, preserve_dir: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(preserve_dir.into());
        self
    }

    pub fn weasyprint_path(&mut self, weasyprint_path: impl Into<PathBuf>) -> &mut Self {
        self.weasyprint_path = Some(weasyprint_path.into());
        self
    }

    pub fn build(self) -> Result<Config, MissingTemplate> {
        if self.template.is_none() && !self.print {
            return Err(MissingTemplate);
        }

        Ok(Config {
            schedule: self.schedule,
            date: self
                .date
                .unwrap_or_else(|| coming_sunday(Local::now().date_naive())),
            template: self.template,
            print: self.print,
            output: self.output.unwrap_or_else(|| DEFAULT_OUTPUT_FILE.into()),
            preserve_dir: self.preserve_dir,
            weasyprint_path: self.weasyprint_path,
        })
    }
}

impl Config {
    pub fn builder(schedule: impl Into<PathBuf>) -> ConfigBuilder {
        ConfigBuilder::new(schedule)
    }

    pub fn schedule(&self) -> &Path {
        &self.schedule
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn template(&self) -> Option<&Path> {
        self.template.as_deref()
    }

    pub fn print(&self) -> bool {
        self.print
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn preserve_dir(&self) -> Option<&Path> {
        self.preserve_dir.as_deref()
    }

    pub fn weasyprint_path(&self) -> Option<&Path> {
        self.weasyprint_path.as_deref()
    }
}

/// The next Sunday on or after `today`; `today` itself when it is a Sunday.
#[must_use]
pub fn coming_sunday(today: NaiveDate) -> NaiveDate {
    let days_until_sunday = (6 - today.weekday().num_days_from_monday()) % 7;

    today + Days::new(u64::from(days_until_sunday))
}
