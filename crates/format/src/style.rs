//! Fixed date layouts.

use sambat_calendar::CustomCalendar;

use crate::digits::localize_number;
use crate::locale::Locale;
use crate::names::{Language, MonthNames, NameFormat, month_name, weekday_name};

/// Fixed date layouts selectable through a [`Locale`].
///
/// | Style | English | Nepali |
/// |-------|---------|--------|
/// | `Full` | `Monday, Bhadra 24, 2081` | `सोमबार, भदौ २४, २०८१` |
/// | `Long` | `Bhadra 24, 2081` | `भदौ २४, २०८१` |
/// | `Medium` | `2081 Bhadra 24` | `२०८१ भदौ २४` |
/// | `ShortMdy` | `05/24/2081` | `०५/२४/२०८१` |
/// | `ShortYmd` | `2081/05/24` | `२०८१/०५/२४` |
/// | `CompactMdy` | `05/24/81` | `०५/२४/८१` |
/// | `CompactYmd` | `81/05/24` | `८१/०५/२४` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormatStyle {
    Full,
    #[default]
    Long,
    Medium,
    ShortMdy,
    ShortYmd,
    CompactMdy,
    CompactYmd,
}

/// Renders `calendar` in the locale's date style.
///
/// Month names come from the calendar's own era: BS records get Baisakh
/// through Chaitra, AD records January through December.
pub fn format_date(calendar: &CustomCalendar, locale: &Locale) -> String {
    let language = locale.language();
    let num = |n: String| localize_number(&n, language);

    let year = num(calendar.year().to_string());
    let short_year = num(format!("{:02}", calendar.year().rem_euclid(100)));
    let month = num(format!("{:02}", calendar.month()));
    let day = num(calendar.day_of_month().to_string());
    let padded_day = num(format!("{:02}", calendar.day_of_month()));
    let month_name = record_month_name(calendar, locale.month_name(), language);

    match locale.date_style() {
        DateFormatStyle::Full => {
            let weekday = record_weekday_name(calendar, locale.weekday_name(), language);
            format!("{weekday}, {month_name} {day}, {year}")
        }
        DateFormatStyle::Long => format!("{month_name} {day}, {year}"),
        DateFormatStyle::Medium => format!("{year} {month_name} {day}"),
        DateFormatStyle::ShortMdy => format!("{month}/{padded_day}/{year}"),
        DateFormatStyle::ShortYmd => format!("{year}/{month}/{padded_day}"),
        DateFormatStyle::CompactMdy => format!("{month}/{padded_day}/{short_year}"),
        DateFormatStyle::CompactYmd => format!("{short_year}/{month}/{padded_day}"),
    }
}

pub(crate) fn record_month_name(
    calendar: &CustomCalendar,
    format: NameFormat,
    language: Language,
) -> &'static str {
    month_name(
        calendar.month(),
        MonthNames::for_era(calendar.era()),
        format,
        language,
    )
    .expect("resolved records carry a month in 1..=12")
}

pub(crate) fn record_weekday_name(
    calendar: &CustomCalendar,
    format: NameFormat,
    language: Language,
) -> &'static str {
    weekday_name(calendar.day_of_week(), format, language)
        .expect("resolved records carry a weekday in 1..=7")
}
