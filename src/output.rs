//! Rendering settings shared by every subcommand.

use anyhow::Result;

use sambat_calendar::{CustomCalendar, CustomDateTime, SimpleTime};
use sambat_format::{Language, Locale, format_date, format_time};

use crate::config::SambatConfig;
use crate::convert;

/// Locale and output preferences resolved from config and CLI overrides.
#[derive(Debug, Clone)]
pub struct Output {
    /// Language, layout and name widths for date output.
    pub locale: Locale,
    /// Whether clock times use the 24-hour form.
    pub use_24_hour: bool,
    /// Default pattern for `format` when none is passed.
    pub pattern: Option<String>,
}

impl Output {
    /// Resolves output settings; CLI values win over the config file.
    pub fn new(config: &SambatConfig, language: Option<&str>, style: Option<&str>) -> Result<Self> {
        Ok(Self {
            locale: convert::build_locale(&config.locale, language, style)?,
            use_24_hour: config.locale.use_24_hour,
            pattern: config.output.pattern.clone(),
        })
    }

    /// Output language.
    pub fn language(&self) -> Language {
        self.locale.language()
    }

    /// Renders a date in the configured layout.
    pub fn date(&self, calendar: &CustomCalendar) -> String {
        format_date(calendar, &self.locale)
    }

    /// Renders a clock time.
    pub fn time(&self, time: SimpleTime) -> String {
        format_time(time, self.language(), self.use_24_hour)
    }

    /// Renders a date followed by its clock time.
    pub fn datetime(&self, datetime: &CustomDateTime) -> String {
        format!("{} {}", self.date(datetime.calendar()), self.time(datetime.time()))
    }
}
