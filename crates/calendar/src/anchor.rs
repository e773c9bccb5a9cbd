//! Per-year anchor states for both calendars.
//!
//! An anchor pairs a resolved BS record with the resolved AD record for the
//! same day. Each supported year gets the pair for the last day of the
//! preceding year, except the first year, whose anchor is the epoch itself.
//! Lookup is therefore total over the supported range and no conversion
//! walks more than about a year.

use std::sync::LazyLock;

use tracing::debug;

use crate::date::Era;
use crate::error::CalendarError;
use crate::gregorian::days_in_ad_month;
use crate::record::CustomCalendar;
use crate::table::{AD_YEARS, BS_YEARS, check_ad_year, check_bs_year, days_in_bs_month};
use crate::walk::step;

/// The same day expressed in both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AnchorPair {
    pub(crate) bs: CustomCalendar,
    pub(crate) ad: CustomCalendar,
}

/// BS 1970/1/1 = AD 1913-04-13, a Sunday.
pub(crate) const EPOCH: AnchorPair = AnchorPair {
    bs: CustomCalendar {
        year: 1970,
        month: 1,
        day_of_month: 1,
        era: Era::Bs,
        first_day_of_month: 1,
        last_day_of_month: 3,
        total_days_in_month: 31,
        day_of_week_in_month: 1,
        day_of_week: 1,
        day_of_year: 1,
        week_of_month: 1,
        week_of_year: 1,
    },
    ad: CustomCalendar {
        year: 1913,
        month: 4,
        day_of_month: 13,
        era: Era::Ad,
        first_day_of_month: 3,
        last_day_of_month: 4,
        total_days_in_month: 30,
        day_of_week_in_month: 2,
        day_of_week: 1,
        day_of_year: 103,
        week_of_month: 3,
        week_of_year: 16,
    },
};

struct Anchors {
    by_bs_year: Vec<AnchorPair>,
    by_ad_year: Vec<AnchorPair>,
}

static ANCHORS: LazyLock<Anchors> = LazyLock::new(build_anchors);

/// Walks the whole table once from the epoch, keeping each year-end state.
fn build_anchors() -> Anchors {
    let mut by_bs_year = vec![EPOCH];
    let mut by_ad_year = vec![EPOCH];
    let mut pair = EPOCH;
    let (last_bs_year, last_ad_year) = (*BS_YEARS.end(), *AD_YEARS.end());

    while !(pair.bs.year == last_bs_year
        && pair.bs.month == 12
        && pair.bs.day_of_month == pair.bs.total_days_in_month)
    {
        // The walk stops on the last table day, so every month it enters is covered.
        step(&mut pair.bs, days_in_bs_month).expect("BS table covers the epoch walk");
        step(&mut pair.ad, days_in_ad_month).expect("walked AD months stay within 1..=12");

        let settled = AnchorPair {
            bs: pair.bs.settle(),
            ad: pair.ad.settle(),
        };
        if pair.bs.month == 12
            && pair.bs.day_of_month == pair.bs.total_days_in_month
            && pair.bs.year < last_bs_year
        {
            by_bs_year.push(settled);
        }
        if pair.ad.month == 12 && pair.ad.day_of_month == 31 && pair.ad.year < last_ad_year {
            by_ad_year.push(settled);
        }
    }

    debug!(
        bs_anchors = by_bs_year.len(),
        ad_anchors = by_ad_year.len(),
        "built anchor tables"
    );
    Anchors {
        by_bs_year,
        by_ad_year,
    }
}

/// Returns the anchor to walk from for a date in BS `year`.
pub(crate) fn for_bs_year(year: i32) -> Result<&'static AnchorPair, CalendarError> {
    check_bs_year(year)?;
    Ok(&ANCHORS.by_bs_year[(year - BS_YEARS.start()) as usize])
}

/// Returns the anchor to walk from for a date in AD `year`.
pub(crate) fn for_ad_year(year: i32) -> Result<&'static AnchorPair, CalendarError> {
    check_ad_year(year)?;
    Ok(&ANCHORS.by_ad_year[(year - AD_YEARS.start()) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_anchor_per_supported_year() {
        assert_eq!(ANCHORS.by_bs_year.len(), BS_YEARS.count());
        assert_eq!(ANCHORS.by_ad_year.len(), AD_YEARS.count());
    }

    #[test]
    fn first_years_anchor_on_epoch() {
        assert_eq!(*for_bs_year(1970).unwrap(), EPOCH);
        assert_eq!(*for_ad_year(1913).unwrap(), EPOCH);
    }

    #[test]
    fn bs_anchors_sit_on_previous_year_end() {
        for year in 1971..=2100 {
            let anchor = for_bs_year(year).unwrap();
            assert_eq!(anchor.bs.year, year - 1, "anchor year for BS {year}");
            assert_eq!(anchor.bs.month, 12);
            assert_eq!(anchor.bs.day_of_month, anchor.bs.total_days_in_month);
        }
    }

    #[test]
    fn ad_anchors_sit_on_december_31() {
        for year in 1914..=2043 {
            let anchor = for_ad_year(year).unwrap();
            assert_eq!(
                (anchor.ad.year, anchor.ad.month, anchor.ad.day_of_month),
                (year - 1, 12, 31),
                "anchor for AD {year}"
            );
            assert_eq!(anchor.ad.day_of_year, if (year - 1) % 4 == 0 { 366 } else { 365 });
        }
    }

    #[test]
    fn anchor_weekdays_agree_across_calendars() {
        for anchor in ANCHORS.by_bs_year.iter().chain(&ANCHORS.by_ad_year) {
            assert_eq!(anchor.bs.day_of_week, anchor.ad.day_of_week);
        }
    }

    #[test]
    fn lookup_outside_range_fails() {
        assert!(for_bs_year(2101).is_err());
        assert!(for_ad_year(1912).is_err());
        assert!(for_ad_year(2044).is_err());
    }
}
