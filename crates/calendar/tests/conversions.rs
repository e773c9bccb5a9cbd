use sambat_calendar::{
    BS_YEARS, CustomCalendar, DayOverflow, Era, SimpleDate, adjust_by_days, days_in_bs_month,
    resolve_bs_date, to_ad, to_bs,
};

/// Expected BS fields: (first, last, total, day_of_week, day_of_year, week_of_month, week_of_year).
type Fields = (u8, u8, u8, u8, u16, u8, u8);

fn fields(cal: &CustomCalendar) -> Fields {
    (
        cal.first_day_of_month(),
        cal.last_day_of_month(),
        cal.total_days_in_month(),
        cal.day_of_week(),
        cal.day_of_year(),
        cal.week_of_month(),
        cal.week_of_year(),
    )
}

#[test]
fn ad_to_bs_known_dates() {
    let cases: &[((i32, u8, u8), (i32, u8, u8), Fields)] = &[
        ((2000, 6, 24), (2057, 3, 10), (5, 7, 31, 7, 73, 2, 11)),
        ((1997, 5, 13), (2054, 1, 31), (1, 3, 31, 3, 31, 5, 5)),
        ((1914, 8, 8), (1971, 4, 24), (5, 7, 31, 7, 118, 4, 17)),
        ((2025, 6, 15), (2082, 3, 1), (1, 3, 31, 1, 63, 1, 10)),
        ((2024, 2, 29), (2080, 11, 17), (3, 4, 30, 5, 322, 3, 47)),
        ((2032, 6, 5), (2089, 2, 23), (6, 2, 32, 7, 53, 4, 8)),
        ((2043, 10, 14), (2100, 6, 27), (6, 7, 30, 4, 184, 5, 27)),
    ];
    for &((y, m, d), (by, bm, bd), expected) in cases {
        let cal = to_bs(y, m, d).unwrap();
        assert_eq!(cal.era(), Era::Bs);
        assert_eq!(
            (cal.year(), cal.month(), cal.day_of_month()),
            (by, bm, bd),
            "to_bs({y}, {m}, {d})"
        );
        assert_eq!(fields(&cal), expected, "fields of to_bs({y}, {m}, {d})");
    }
}

#[test]
fn week_rolls_over_on_sunday() {
    let saturday = to_bs(2024, 3, 2).unwrap();
    let sunday = to_bs(2024, 3, 3).unwrap();
    assert_eq!((saturday.day_of_week(), saturday.week_of_month(), saturday.week_of_year()), (7, 3, 47));
    assert_eq!((sunday.day_of_week(), sunday.week_of_month(), sunday.week_of_year()), (1, 4, 48));
    assert_eq!(sunday.day_of_year(), saturday.day_of_year() + 1);
}

#[test]
fn bs_to_ad_known_dates() {
    // Expected AD fields use the same layout as the BS cases plus day_of_week_in_month.
    let cases: &[((i32, u8, u8), (i32, u8, u8), Fields, u8)] = &[
        ((2079, 1, 1), (2022, 4, 14), (6, 7, 30, 5, 104, 3, 16), 2),
        ((2082, 1, 1), (2025, 4, 14), (3, 4, 30, 2, 104, 3, 16), 2),
        ((2100, 11, 12), (2044, 2, 24), (2, 2, 29, 4, 55, 4, 9), 4),
        ((2087, 9, 21), (2031, 1, 5), (4, 6, 31, 1, 5, 2, 2), 1),
        ((2097, 3, 17), (2040, 7, 1), (1, 3, 31, 1, 183, 1, 27), 1),
        ((2034, 6, 29), (1977, 10, 15), (7, 2, 31, 7, 288, 3, 42), 3),
    ];
    for &((y, m, d), (ay, am, ad), expected, dwim) in cases {
        let cal = to_ad(y, m, d).unwrap();
        assert_eq!(cal.era(), Era::Ad);
        assert_eq!(
            (cal.year(), cal.month(), cal.day_of_month()),
            (ay, am, ad),
            "to_ad({y}, {m}, {d})"
        );
        assert_eq!(fields(&cal), expected, "fields of to_ad({y}, {m}, {d})");
        assert_eq!(cal.day_of_week_in_month(), dwim, "dwim of to_ad({y}, {m}, {d})");
    }
}

#[test]
fn walked_and_resolved_records_agree() {
    let cases: &[((i32, u8, u8), (i32, u8, u8))] = &[
        ((2024, 9, 28), (2081, 6, 12)),
        ((2025, 4, 12), (2081, 12, 30)),
        ((2024, 9, 29), (2081, 6, 13)),
        ((2025, 4, 13), (2081, 12, 31)),
    ];
    for &((y, m, d), (by, bm, bd)) in cases {
        assert_eq!(
            to_bs(y, m, d).unwrap(),
            resolve_bs_date(by, bm, bd, DayOverflow::Strict).unwrap(),
            "to_bs({y}, {m}, {d}) vs resolve({by}, {bm}, {bd})"
        );
    }
}

#[test]
fn roundtrip_first_and_last_day_of_every_month() {
    for year in BS_YEARS {
        for month in 1..=12u8 {
            let last = days_in_bs_month(year, month).unwrap();
            for day in [1, 15, last] {
                let ad = to_ad(year, month, day).unwrap();
                if ad.year() > 2043 {
                    continue;
                }
                let bs = to_bs(ad.year(), ad.month(), ad.day_of_month()).unwrap();
                assert_eq!(
                    bs.date(),
                    SimpleDate::new(year, month, day),
                    "roundtrip failed for BS {year}/{month}/{day} via {}",
                    ad.date()
                );
                assert_eq!(bs.day_of_week(), ad.day_of_week());
            }
        }
    }
}

#[test]
fn stepping_one_day_advances_weekday() {
    let mut prev = resolve_bs_date(2080, 1, 1, DayOverflow::Strict).unwrap();
    for _ in 0..800 {
        let next = adjust_by_days(prev.year(), prev.month(), prev.day_of_month(), 1).unwrap();
        let expected = if prev.day_of_week() == 7 { 1 } else { prev.day_of_week() + 1 };
        assert_eq!(next.day_of_week(), expected, "weekday after {}", prev.date());
        let ad = to_ad(next.year(), next.month(), next.day_of_month()).unwrap();
        assert_eq!(ad.day_of_week(), next.day_of_week(), "AD weekday for {}", next.date());
        prev = next;
    }
}

#[test]
fn seven_days_keep_the_weekday() {
    for (y, m, d) in [(2081, 1, 1), (2000, 6, 15), (1975, 12, 30)] {
        let start = resolve_bs_date(y, m, d, DayOverflow::Strict).unwrap();
        let later = adjust_by_days(y, m, d, 7).unwrap();
        assert_eq!(start.day_of_week(), later.day_of_week());
    }
}
