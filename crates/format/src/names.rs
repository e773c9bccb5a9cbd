//! Month, weekday and day-period names in English and Nepali.

use sambat_calendar::Era;

use crate::error::FormatError;

/// Output language for names and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Latin names and ASCII digits.
    #[default]
    English,
    /// Devanagari names and digits.
    Nepali,
}

/// Width of a rendered name.
///
/// Month tables carry only short and full forms; [`NameFormat::Medium`]
/// renders the full month name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameFormat {
    /// `Monday`, `Bhadra`.
    #[default]
    Full,
    /// `Mon`.
    Medium,
    /// `M`, `Bha`.
    Short,
}

/// Which calendar's month names to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthNames {
    /// Baisakh through Chaitra.
    Bikram,
    /// January through December.
    Gregorian,
}

impl MonthNames {
    /// Returns the month names native to `era`.
    pub fn for_era(era: Era) -> Self {
        match era {
            Era::Bs => MonthNames::Bikram,
            Era::Ad => MonthNames::Gregorian,
        }
    }
}

/// (short, full)
type MonthRow = [(&'static str, &'static str); 12];
/// (short, medium, full)
type WeekdayRow = [(&'static str, &'static str, &'static str); 7];

#[rustfmt::skip]
const BS_MONTHS_NEPALI: MonthRow = [
    ("बै", "बैशाख"), ("जे", "जेठ"), ("अ", "असार"), ("सा", "साउन"),
    ("भ", "भदौ"), ("अ", "असोज"), ("का", "कार्तिक"), ("मं", "मंसिर"),
    ("पु", "पौष"), ("मा", "माघ"), ("फा", "फाल्गुन"), ("चै", "चैत"),
];

#[rustfmt::skip]
const BS_MONTHS_ENGLISH: MonthRow = [
    ("Bai", "Baisakh"), ("Jes", "Jestha"), ("Asa", "Asar"), ("Shr", "Shrawn"),
    ("Bha", "Bhadra"), ("Aso", "Asoj"), ("Kar", "Kartik"), ("Man", "Mangsir"),
    ("Pou", "Poush"), ("Mag", "Magh"), ("Pha", "Falgun"), ("Chai", "Chaitra"),
];

#[rustfmt::skip]
const AD_MONTHS_ENGLISH: MonthRow = [
    ("Jan", "January"), ("Feb", "February"), ("Mar", "March"), ("Apr", "April"),
    ("May", "May"), ("Jun", "June"), ("Jul", "July"), ("Aug", "August"),
    ("Sep", "September"), ("Oct", "October"), ("Nov", "November"), ("Dec", "December"),
];

#[rustfmt::skip]
const AD_MONTHS_NEPALI: MonthRow = [
    ("जन", "जनवरी"), ("फेब्रु", "फेब्रुअरी"), ("मार्च", "मार्च"), ("अप्रि", "अप्रिल"),
    ("मे", "मे"), ("जुन", "जुन"), ("जुला", "जुलाई"), ("अग", "अगस्ट"),
    ("सेप्ट", "सेप्टेम्बर"), ("अक्टो", "अक्टोबर"), ("नोभे", "नोभेम्बर"), ("डिसे", "डिसेम्बर"),
];

#[rustfmt::skip]
const WEEKDAYS_ENGLISH: WeekdayRow = [
    ("S", "Sun", "Sunday"), ("M", "Mon", "Monday"), ("T", "Tue", "Tuesday"),
    ("W", "Wed", "Wednesday"), ("T", "Thu", "Thursday"), ("F", "Fri", "Friday"),
    ("S", "Sat", "Saturday"),
];

#[rustfmt::skip]
const WEEKDAYS_NEPALI: WeekdayRow = [
    ("आ", "आईत", "आईतबार"), ("सो", "सोम", "सोमबार"), ("मं", "मंगल", "मंगलबार"),
    ("बु", "बुध", "बुधबार"), ("बि", "बिहि", "बिहिबार"), ("शु", "शुक्र", "शुक्रबार"),
    ("श", "शनि", "शनिबार"),
];

/// Returns the name of `month` (1..=12).
///
/// # Errors
///
/// Returns [`FormatError::UnknownName`] if `month` is outside 1..=12.
pub fn month_name(
    month: u8,
    names: MonthNames,
    format: NameFormat,
    language: Language,
) -> Result<&'static str, FormatError> {
    let table = match (names, language) {
        (MonthNames::Bikram, Language::English) => &BS_MONTHS_ENGLISH,
        (MonthNames::Bikram, Language::Nepali) => &BS_MONTHS_NEPALI,
        (MonthNames::Gregorian, Language::English) => &AD_MONTHS_ENGLISH,
        (MonthNames::Gregorian, Language::Nepali) => &AD_MONTHS_NEPALI,
    };
    let (short, full) = lookup(table, "month", month)?;
    Ok(match format {
        NameFormat::Short => short,
        NameFormat::Medium | NameFormat::Full => full,
    })
}

/// Returns the name of weekday `day_of_week` (1 = Sunday).
///
/// # Errors
///
/// Returns [`FormatError::UnknownName`] if `day_of_week` is outside 1..=7.
pub fn weekday_name(
    day_of_week: u8,
    format: NameFormat,
    language: Language,
) -> Result<&'static str, FormatError> {
    let table = match language {
        Language::English => &WEEKDAYS_ENGLISH,
        Language::Nepali => &WEEKDAYS_NEPALI,
    };
    let (short, medium, full) = lookup(table, "weekday", day_of_week)?;
    Ok(match format {
        NameFormat::Short => short,
        NameFormat::Medium => medium,
        NameFormat::Full => full,
    })
}

/// Returns the Nepali period of day for `hour` (0..=23).
///
/// The bands do not split at noon: morning runs 3..=11, afternoon
/// 12..=16, evening 17..=19 and night covers the rest, across midnight.
pub fn nepali_period(hour: u8) -> &'static str {
    match hour {
        3..=11 => "बिहान",
        12..=16 => "दिउँसो",
        17..=19 => "साँझ",
        _ => "राति",
    }
}

/// Returns `AM` before noon and `PM` after.
pub fn english_period(hour: u8) -> &'static str {
    if hour < 12 { "AM" } else { "PM" }
}

fn lookup<T: Copy, const N: usize>(
    table: &[T; N],
    kind: &'static str,
    index: u8,
) -> Result<T, FormatError> {
    usize::from(index)
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .copied()
        .ok_or(FormatError::UnknownName {
            kind,
            index,
            max: N as u8,
        })
}
