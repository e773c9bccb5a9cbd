//! Locale settings for rendering dates.

use crate::names::{Language, NameFormat};
use crate::style::DateFormatStyle;

/// How [`crate::format_date`] renders a date.
///
/// # Example
///
/// ```
/// use sambat_format::{DateFormatStyle, Language, Locale, NameFormat};
///
/// let locale = Locale::new()
///     .with_language(Language::Nepali)
///     .with_date_style(DateFormatStyle::Full)
///     .with_weekday_name(NameFormat::Medium);
///
/// assert_eq!(locale.month_name(), NameFormat::Full);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    language: Language,
    date_style: DateFormatStyle,
    weekday_name: NameFormat,
    month_name: NameFormat,
}

impl Locale {
    /// Creates a locale with defaults.
    ///
    /// Defaults: English, [`DateFormatStyle::Long`], full weekday and month names.
    pub fn new() -> Self {
        Self {
            language: Language::English,
            date_style: DateFormatStyle::Long,
            weekday_name: NameFormat::Full,
            month_name: NameFormat::Full,
        }
    }

    /// Sets the output language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets the date layout.
    pub fn with_date_style(mut self, date_style: DateFormatStyle) -> Self {
        self.date_style = date_style;
        self
    }

    /// Sets the weekday name width.
    pub fn with_weekday_name(mut self, weekday_name: NameFormat) -> Self {
        self.weekday_name = weekday_name;
        self
    }

    /// Sets the month name width.
    pub fn with_month_name(mut self, month_name: NameFormat) -> Self {
        self.month_name = month_name;
        self
    }

    /// Returns the output language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the date layout.
    pub fn date_style(&self) -> DateFormatStyle {
        self.date_style
    }

    /// Returns the weekday name width.
    pub fn weekday_name(&self) -> NameFormat {
        self.weekday_name
    }

    /// Returns the month name width.
    pub fn month_name(&self) -> NameFormat {
        self.month_name
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new()
    }
}
