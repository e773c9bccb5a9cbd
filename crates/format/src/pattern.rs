//! Unicode-style date/time patterns.
//!
//! A pattern is scanned left to right. At each position the longest token
//! that matches is substituted; anything else is copied through unchanged.
//! There is no escaping.
//!
//! | Token | Value | Example |
//! |-------|-------|---------|
//! | `yyyy` / `yy` | year / last two digits | `2081` / `81` |
//! | `MMMM` / `MMM` | full / short month name | `Bhadra` / `Bha` |
//! | `MM` / `M` | month number, padded / bare | `05` / `5` |
//! | `dd` / `d` | day of month, padded / bare | `04` / `4` |
//! | `D` | day of year | `150` |
//! | `w` | week of year | `23` |
//! | `EEEEE` / `EEEE` / `E` | short / full / medium weekday | `M` / `Monday` / `Mon` |
//! | `ee` / `e` | weekday number (1 = Sunday), padded / bare | `02` / `2` |
//! | `HH` / `H` | 24-hour clock, padded / bare | `14` |
//! | `hh` / `h` | 12-hour clock, padded / bare | `02` / `2` |
//! | `mm` / `m`, `ss` / `s` | minute, second | `45` |
//! | `SSSS`..`S` | leading digits of the nanosecond | `1230` .. `1` |
//! | `a` / `A` | `am` / `AM`, or the Nepali period of day | `pm` / `PM` / `दिउँसो` |
//!
//! Date tokens pass through verbatim when no calendar is given, and time
//! tokens when no time is given.

use std::cmp::Reverse;
use std::sync::LazyLock;

use sambat_calendar::{CustomCalendar, SimpleTime};
use tracing::trace;

use crate::digits::localize_number;
use crate::names::{
    Language, MonthNames, NameFormat, english_period, month_name, nepali_period,
};
use crate::style::record_weekday_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateField {
    Year,
    ShortYear,
    MonthName(NameFormat),
    PaddedMonth,
    Month,
    PaddedDay,
    Day,
    DayOfYear,
    WeekOfYear,
    WeekdayName(NameFormat),
    PaddedWeekday,
    Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeField {
    PaddedHour,
    Hour,
    PaddedHour12,
    Hour12,
    PaddedMinute,
    Minute,
    PaddedSecond,
    Second,
    Fraction(usize),
    Period,
    UpperPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date(DateField),
    Time(TimeField),
}

use DateField as D;
use TimeField as T;

#[rustfmt::skip]
const TOKENS: [(&str, Field); 29] = [
    ("yyyy", Field::Date(D::Year)), ("yy", Field::Date(D::ShortYear)),
    ("MMMM", Field::Date(D::MonthName(NameFormat::Full))),
    ("MMM", Field::Date(D::MonthName(NameFormat::Short))),
    ("MM", Field::Date(D::PaddedMonth)), ("M", Field::Date(D::Month)),
    ("dd", Field::Date(D::PaddedDay)), ("d", Field::Date(D::Day)),
    ("D", Field::Date(D::DayOfYear)),
    ("EEEEE", Field::Date(D::WeekdayName(NameFormat::Short))),
    ("EEEE", Field::Date(D::WeekdayName(NameFormat::Full))),
    ("E", Field::Date(D::WeekdayName(NameFormat::Medium))),
    ("ee", Field::Date(D::PaddedWeekday)), ("e", Field::Date(D::Weekday)),
    ("w", Field::Date(D::WeekOfYear)),
    ("HH", Field::Time(T::PaddedHour)), ("H", Field::Time(T::Hour)),
    ("hh", Field::Time(T::PaddedHour12)), ("h", Field::Time(T::Hour12)),
    ("mm", Field::Time(T::PaddedMinute)), ("m", Field::Time(T::Minute)),
    ("ss", Field::Time(T::PaddedSecond)), ("s", Field::Time(T::Second)),
    ("SSSS", Field::Time(T::Fraction(4))), ("SSS", Field::Time(T::Fraction(3))),
    ("SS", Field::Time(T::Fraction(2))), ("S", Field::Time(T::Fraction(1))),
    ("a", Field::Time(T::Period)), ("A", Field::Time(T::UpperPeriod)),
];

/// Tokens ordered longest first, so the first prefix match is the longest.
static TOKENS_BY_LENGTH: LazyLock<Vec<(&'static str, Field)>> = LazyLock::new(|| {
    let mut tokens = TOKENS.to_vec();
    tokens.sort_by_key(|(token, _)| Reverse(token.len()));
    tokens
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token(&'static str, Field),
}

/// A tokenized pattern, reusable across many dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Tokenizes `text`.
    pub fn new(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            let hit = TOKENS_BY_LENGTH
                .iter()
                .find(|&&(token, _)| rest.starts_with(token));
            match hit {
                Some(&(token, field)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Token(token, field));
                    rest = &rest[token.len()..];
                }
                None => {
                    literal.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        trace!(pattern = text, segments = segments.len(), "pattern tokenized");
        Self { segments }
    }

    /// Renders the pattern.
    ///
    /// `names` picks the month-name table independently of the calendar's
    /// era, so a BS record can be rendered with Gregorian month names.
    pub fn render(
        &self,
        calendar: Option<&CustomCalendar>,
        time: Option<SimpleTime>,
        names: MonthNames,
        language: Language,
    ) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(token, field) => {
                    let value = match *field {
                        Field::Date(field) => calendar.map(|c| date_value(field, c, names, language)),
                        Field::Time(field) => time.map(|t| time_value(field, t, language)),
                    };
                    match value {
                        Some(value) => out.push_str(&value),
                        None => out.push_str(token),
                    }
                }
            }
        }
        out
    }
}

fn date_value(
    field: DateField,
    calendar: &CustomCalendar,
    names: MonthNames,
    language: Language,
) -> String {
    let number = match field {
        D::Year => calendar.year().to_string(),
        D::ShortYear => format!("{:02}", calendar.year().rem_euclid(100)),
        D::PaddedMonth => format!("{:02}", calendar.month()),
        D::Month => calendar.month().to_string(),
        D::PaddedDay => format!("{:02}", calendar.day_of_month()),
        D::Day => calendar.day_of_month().to_string(),
        D::DayOfYear => calendar.day_of_year().to_string(),
        D::WeekOfYear => calendar.week_of_year().to_string(),
        D::PaddedWeekday => format!("{:02}", calendar.day_of_week()),
        D::Weekday => calendar.day_of_week().to_string(),
        D::MonthName(format) => {
            return month_name(calendar.month(), names, format, language)
                .expect("resolved records carry a month in 1..=12")
                .to_string();
        }
        D::WeekdayName(format) => {
            return record_weekday_name(calendar, format, language).to_string();
        }
    };
    localize_number(&number, language)
}

fn time_value(field: TimeField, time: SimpleTime, language: Language) -> String {
    let number = match field {
        T::PaddedHour => format!("{:02}", time.hour()),
        T::Hour => time.hour().to_string(),
        T::PaddedHour12 => format!("{:02}", time.hour_12()),
        T::Hour12 => time.hour_12().to_string(),
        T::PaddedMinute => format!("{:02}", time.minute()),
        T::Minute => time.minute().to_string(),
        T::PaddedSecond => format!("{:02}", time.second()),
        T::Second => time.second().to_string(),
        T::Fraction(digits) => format!("{:09}", time.nanosecond())[..digits].to_string(),
        T::Period => match language {
            Language::English => english_period(time.hour()).to_lowercase(),
            Language::Nepali => nepali_period(time.hour()).to_string(),
        },
        T::UpperPeriod => match language {
            Language::English => english_period(time.hour()).to_string(),
            Language::Nepali => nepali_period(time.hour()).to_string(),
        },
    };
    localize_number(&number, language)
}

/// Renders a pattern for a BS record with Baisakh..Chaitra month names.
pub fn format_bs_pattern(
    pattern: &str,
    calendar: &CustomCalendar,
    time: Option<SimpleTime>,
    language: Language,
) -> String {
    Pattern::new(pattern).render(Some(calendar), time, MonthNames::Bikram, language)
}

/// Renders a pattern with January..December month names.
///
/// The month number is taken from the record as is; no conversion happens.
pub fn format_ad_pattern(
    pattern: &str,
    calendar: &CustomCalendar,
    time: Option<SimpleTime>,
    language: Language,
) -> String {
    Pattern::new(pattern).render(Some(calendar), time, MonthNames::Gregorian, language)
}

/// Renders only the time tokens of a pattern.
pub fn format_time_pattern(pattern: &str, time: SimpleTime, language: Language) -> String {
    Pattern::new(pattern).render(None, Some(time), MonthNames::Gregorian, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&'static str> {
        Pattern::new(text)
            .segments
            .into_iter()
            .filter_map(|s| match s {
                Segment::Token(token, _) => Some(token),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    #[test]
    fn longest_token_wins() {
        assert_eq!(tokens("yyyy"), ["yyyy"]);
        assert_eq!(tokens("yyy"), ["yy"]);
        assert_eq!(tokens("MMMMM"), ["MMMM", "M"]);
        assert_eq!(tokens("EEEEEE"), ["EEEEE", "E"]);
        assert_eq!(tokens("SSSSS"), ["SSSS", "S"]);
    }

    #[test]
    fn sorted_table_is_complete() {
        assert_eq!(TOKENS_BY_LENGTH.len(), TOKENS.len());
        assert!(
            TOKENS_BY_LENGTH
                .windows(2)
                .all(|w| w[0].0.len() >= w[1].0.len())
        );
    }

    #[test]
    fn literals_are_kept() {
        let pattern = Pattern::new("yyyy-XX ??");
        assert_eq!(
            pattern.segments,
            [
                Segment::Token("yyyy", Field::Date(D::Year)),
                Segment::Literal("-XX ??".to_string()),
            ]
        );
    }

    #[test]
    fn multibyte_literals() {
        assert_eq!(tokens("साल yyyy"), ["yyyy"]);
        let time = SimpleTime::new(9, 5, 0, 0).unwrap();
        assert_eq!(format_time_pattern("समय H:mm", time, Language::Nepali), "समय ९:०५");
    }

    #[test]
    fn time_pattern_leaves_date_tokens() {
        let time = SimpleTime::new(9, 5, 3, 45_000_000).unwrap();
        assert_eq!(format_time_pattern("yyyy hh:mm", time, Language::English), "yyyy 09:05");
    }

    #[test]
    fn fractions() {
        let time = SimpleTime::new(0, 0, 0, 45_000_000).unwrap();
        assert_eq!(format_time_pattern("S SS SSS SSSS", time, Language::English), "0 04 045 0450");
    }

    #[test]
    fn periods() {
        let morning = SimpleTime::new(5, 0, 0, 0).unwrap();
        let evening = SimpleTime::new(18, 0, 0, 0).unwrap();
        assert_eq!(format_time_pattern("a", morning, Language::English), "am");
        assert_eq!(format_time_pattern("a", evening, Language::English), "pm");
        assert_eq!(format_time_pattern("A", morning, Language::English), "AM");
        assert_eq!(format_time_pattern("A", evening, Language::English), "PM");
        assert_eq!(format_time_pattern("a", morning, Language::Nepali), "बिहान");
        assert_eq!(format_time_pattern("A", evening, Language::Nepali), "साँझ");
    }
}
