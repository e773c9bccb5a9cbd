//! Pure conversion functions: TOML config and CLI text -> library types.

use anyhow::{Context, Result, bail};

use sambat_calendar::{Era, SimpleDate, SimpleTime};
use sambat_format::{
    DateFormatStyle, FormatError, Language, Locale, NameFormat, parse_date_text,
    parse_localized_number,
};

use crate::config::LocaleToml;

/// Parses a language name string into the corresponding enum variant.
pub fn parse_language(s: &str) -> Result<Language> {
    match s.to_lowercase().as_str() {
        "english" | "en" => Ok(Language::English),
        "nepali" | "ne" | "np" => Ok(Language::Nepali),
        other => bail!("unknown language: {other:?}"),
    }
}

/// Parses a date layout name string into the corresponding enum variant.
pub fn parse_date_style(s: &str) -> Result<DateFormatStyle> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "full" => Ok(DateFormatStyle::Full),
        "long" => Ok(DateFormatStyle::Long),
        "medium" => Ok(DateFormatStyle::Medium),
        "short-mdy" => Ok(DateFormatStyle::ShortMdy),
        "short-ymd" => Ok(DateFormatStyle::ShortYmd),
        "compact-mdy" => Ok(DateFormatStyle::CompactMdy),
        "compact-ymd" => Ok(DateFormatStyle::CompactYmd),
        other => bail!("unknown date style: {other:?}"),
    }
}

/// Parses a name width string into the corresponding enum variant.
pub fn parse_name_format(s: &str) -> Result<NameFormat> {
    match s.to_lowercase().as_str() {
        "full" => Ok(NameFormat::Full),
        "medium" => Ok(NameFormat::Medium),
        "short" => Ok(NameFormat::Short),
        other => bail!("unknown name format: {other:?}"),
    }
}

/// Parses a calendar name string into the corresponding enum variant.
pub fn parse_era(s: &str) -> Result<Era> {
    match s.to_lowercase().as_str() {
        "bs" | "vs" | "nepali" => Ok(Era::Bs),
        "ad" | "ce" | "gregorian" => Ok(Era::Ad),
        other => bail!("unknown calendar: {other:?}"),
    }
}

/// Parses date text in either digit set.
pub fn parse_date(s: &str) -> Result<SimpleDate> {
    parse_date_text(s).with_context(|| format!("invalid date argument {s:?}"))
}

/// Parses `HH:MM` or `HH:MM:SS` in either digit set.
pub fn parse_time(s: &str) -> Result<SimpleTime> {
    let fields = s
        .split(':')
        .map(|f| {
            let n = parse_localized_number(f)?;
            u8::try_from(n).map_err(|_| FormatError::InvalidNumber {
                text: f.to_string(),
            })
        })
        .collect::<Result<Vec<u8>, _>>()
        .with_context(|| format!("invalid time argument {s:?}"))?;
    let (hour, minute, second) = match fields.as_slice() {
        &[h, m] => (h, m, 0),
        &[h, m, sec] => (h, m, sec),
        _ => bail!("invalid time argument {s:?}: expected HH:MM or HH:MM:SS"),
    };
    SimpleTime::new(hour, minute, second, 0).with_context(|| format!("invalid time argument {s:?}"))
}

/// Builds a [`Locale`] from the TOML locale table and CLI overrides.
pub fn build_locale(
    toml: &LocaleToml,
    language: Option<&str>,
    date_style: Option<&str>,
) -> Result<Locale> {
    let language = parse_language(language.unwrap_or(&toml.language))?;
    let date_style = parse_date_style(date_style.unwrap_or(&toml.date_style))?;
    Ok(Locale::new()
        .with_language(language)
        .with_date_style(date_style)
        .with_weekday_name(parse_name_format(&toml.weekday_name)?)
        .with_month_name(parse_name_format(&toml.month_name)?))
}
