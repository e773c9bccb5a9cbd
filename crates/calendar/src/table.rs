//! Bikram Sambat month-length reference table and supported year windows.
//!
//! Month lengths are observational data with no closed form, so every BS
//! computation in this crate bottoms out in [`BS_MONTH_LENGTHS`].

use std::ops::RangeInclusive;

use crate::error::CalendarError;

/// Supported Bikram Sambat years.
pub const BS_YEARS: RangeInclusive<i32> = 1970..=2100;

/// Supported Gregorian input years.
///
/// The last BS year ends in AD 2044, so 2044 dates can be produced by a
/// conversion but are not accepted as input.
pub const AD_YEARS: RangeInclusive<i32> = 1913..=2043;

const BS_FIRST_YEAR: i32 = *BS_YEARS.start();
const BS_YEAR_COUNT: usize = (*BS_YEARS.end() - *BS_YEARS.start() + 1) as usize;

/// Days in each month of every supported BS year (Baisakh first).
#[rustfmt::skip]
pub(crate) const BS_MONTH_LENGTHS: [[u8; 12]; BS_YEAR_COUNT] = [
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1970
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 1971
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1972
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1973
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1974
    [31, 31, 32, 32, 30, 31, 30, 29, 30, 29, 30, 30], // 1975
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1976
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 1977
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1978
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1979
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1980
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 1981
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1982
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1983
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1984
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 1985
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1986
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1987
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1988
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 1989
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1990
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 1991
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1992
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 1993
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1994
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 1995
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1996
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1997
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 1998
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1999
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 31], // 2081
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2091
    [30, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2092
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2093
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2094
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 30, 30], // 2095
    [30, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 31], // 2096
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2097
    [31, 31, 32, 31, 31, 31, 29, 30, 29, 30, 29, 31], // 2098
    [31, 31, 32, 31, 31, 31, 30, 29, 29, 30, 30, 30], // 2099
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2100
];

/// Days from BS 1970/1/1 to the first day of each year; the trailing entry
/// is the day after the table ends.
const YEAR_START_ORDINALS: [u32; BS_YEAR_COUNT + 1] = year_start_ordinals();

const fn year_start_ordinals() -> [u32; BS_YEAR_COUNT + 1] {
    let mut starts = [0u32; BS_YEAR_COUNT + 1];
    let mut y = 0;
    while y < BS_YEAR_COUNT {
        let mut total = 0u32;
        let mut m = 0;
        while m < 12 {
            total += BS_MONTH_LENGTHS[y][m] as u32;
            m += 1;
        }
        starts[y + 1] = starts[y] + total;
        y += 1;
    }
    starts
}

/// Returns the twelve month lengths of a BS year.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the year is not in [`BS_YEARS`].
pub fn month_lengths(year: i32) -> Result<&'static [u8; 12], CalendarError> {
    check_bs_year(year)?;
    Ok(&BS_MONTH_LENGTHS[year_index(year)])
}

/// Returns the number of days in a BS month.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year is unsupported or the month is
/// outside 1..=12.
pub fn days_in_bs_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    check_month(month)?;
    Ok(month_lengths(year)?[usize::from(month - 1)])
}

/// Returns the number of days in a BS year (365 or 366).
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the year is not in [`BS_YEARS`].
pub fn days_in_bs_year(year: i32) -> Result<u16, CalendarError> {
    check_bs_year(year)?;
    let i = year_index(year);
    Ok((YEAR_START_ORDINALS[i + 1] - YEAR_START_ORDINALS[i]) as u16)
}

/// Days in the months of `year` that precede `month`.
pub(crate) fn days_before_month(year: i32, month: u8) -> Result<u16, CalendarError> {
    check_month(month)?;
    let lengths = month_lengths(year)?;
    Ok(lengths[..usize::from(month - 1)]
        .iter()
        .map(|&d| u16::from(d))
        .sum())
}

/// Days elapsed since BS 1970/1/1 for the given date.
///
/// The day is not checked against the month length, so callers that accept
/// the nominal 1..=32 range get a linear offset past the month end.
pub(crate) fn bs_ordinal(year: i32, month: u8, day: u8) -> Result<i64, CalendarError> {
    let before = days_before_month(year, month)?;
    Ok(i64::from(YEAR_START_ORDINALS[year_index(year)])
        + i64::from(before)
        + i64::from(day)
        - 1)
}

pub(crate) fn check_bs_year(year: i32) -> Result<(), CalendarError> {
    if BS_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange {
            calendar: "BS",
            year,
            min: *BS_YEARS.start(),
            max: *BS_YEARS.end(),
        })
    }
}

pub(crate) fn check_ad_year(year: i32) -> Result<(), CalendarError> {
    if AD_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange {
            calendar: "AD",
            year,
            min: *AD_YEARS.start(),
            max: *AD_YEARS.end(),
        })
    }
}

pub(crate) fn check_month(month: u8) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

fn year_index(year: i32) -> usize {
    (year - BS_FIRST_YEAR) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_year_has_365_or_366_days() {
        for year in BS_YEARS {
            let days = days_in_bs_year(year).unwrap();
            assert!(
                days == 365 || days == 366,
                "BS year {year} has {days} days"
            );
        }
    }

    #[test]
    fn month_lengths_stay_within_29_to_32() {
        for year in BS_YEARS {
            for (i, &len) in month_lengths(year).unwrap().iter().enumerate() {
                assert!(
                    (29..=32).contains(&len),
                    "BS {year}/{} has {len} days",
                    i + 1
                );
            }
        }
    }

    #[test]
    fn known_month_lengths() {
        assert_eq!(days_in_bs_month(2081, 12).unwrap(), 31);
        assert_eq!(days_in_bs_month(2082, 4).unwrap(), 32);
        assert_eq!(days_in_bs_month(2080, 11).unwrap(), 30);
        assert_eq!(days_in_bs_month(1970, 1).unwrap(), 31);
    }

    #[test]
    fn year_outside_table() {
        assert_eq!(
            month_lengths(1969).unwrap_err(),
            CalendarError::YearOutOfRange {
                calendar: "BS",
                year: 1969,
                min: 1970,
                max: 2100
            }
        );
        assert!(days_in_bs_month(2101, 1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn month_outside_year() {
        assert_eq!(
            days_in_bs_month(2081, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_bs_month(2081, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn ordinal_counts_from_epoch() {
        assert_eq!(bs_ordinal(1970, 1, 1).unwrap(), 0);
        assert_eq!(bs_ordinal(1970, 2, 1).unwrap(), 31);
        assert_eq!(bs_ordinal(1971, 1, 1).unwrap(), 365);
        assert_eq!(
            bs_ordinal(2081, 5, 24).unwrap() - bs_ordinal(1980, 12, 31).unwrap(),
            36675
        );
    }

    #[test]
    fn days_before_month_sums_prefix() {
        assert_eq!(days_before_month(2082, 1).unwrap(), 0);
        assert_eq!(days_before_month(2082, 4).unwrap(), 30 + 32 + 31);
        assert_eq!(days_before_month(2081, 12).unwrap(), 335);
    }
}
