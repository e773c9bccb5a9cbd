use sambat_calendar::{
    DayOverflow, NepaliMonthCalendar, SimpleDate, ad_days_between, add_months, adjust_by_days,
    days_between, resolve_bs_date, resolve_month, subtract_months, to_ad,
};

fn month_shape(m: &NepaliMonthCalendar) -> (i32, u8, u8, u8, u8) {
    (
        m.year(),
        m.month(),
        m.first_day_of_month(),
        m.last_day_of_month(),
        m.total_days_in_month(),
    )
}

#[test]
fn known_bs_day_counts() {
    let start = SimpleDate::new(1980, 12, 31);
    let end = SimpleDate::new(2081, 5, 24);
    assert_eq!(days_between(start, end).unwrap(), 36675);
    assert_eq!(days_between(end, start).unwrap(), -36675);
}

#[test]
fn known_ad_day_counts() {
    assert_eq!(
        ad_days_between(SimpleDate::new(2016, 2, 16), SimpleDate::new(2021, 3, 27)).unwrap(),
        1866
    );
    assert_eq!(
        ad_days_between(SimpleDate::new(2024, 3, 8), SimpleDate::new(1980, 12, 31)).unwrap(),
        -15773
    );
}

#[test]
fn same_span_counted_in_both_calendars() {
    let bs = days_between(SimpleDate::new(2054, 12, 30), SimpleDate::new(2081, 6, 5)).unwrap();
    let ad = ad_days_between(SimpleDate::new(1998, 4, 12), SimpleDate::new(2024, 9, 21)).unwrap();
    assert_eq!(bs, 9659);
    assert_eq!(ad, 9659);
}

#[test]
fn known_adjustments() {
    assert_eq!(
        adjust_by_days(2081, 6, 9, -12).unwrap(),
        resolve_bs_date(2081, 5, 28, DayOverflow::Strict).unwrap()
    );
    assert_eq!(
        adjust_by_days(2083, 12, 25, 7).unwrap(),
        resolve_bs_date(2084, 1, 2, DayOverflow::Strict).unwrap()
    );
}

#[test]
fn known_month_shapes() {
    assert_eq!(month_shape(&resolve_month(2079, 4).unwrap()), (2079, 4, 1, 3, 31));
    assert_eq!(month_shape(&add_months(2082, 3, 1).unwrap()), (2082, 4, 4, 7, 32));
    assert_eq!(month_shape(&add_months(2079, 4, 24).unwrap()), (2081, 4, 3, 6, 32));
    assert_eq!(month_shape(&subtract_months(2082, 4, 4).unwrap()), (2081, 12, 6, 1, 31));
}

#[test]
fn bs_and_ad_day_counts_agree() {
    let pairs = [
        ((2054, 12, 30), (2081, 6, 5)),
        ((1970, 1, 1), (2100, 12, 31)),
        ((2081, 5, 24), (2000, 1, 1)),
    ];
    for ((y1, m1, d1), (y2, m2, d2)) in pairs {
        let bs = days_between(SimpleDate::new(y1, m1, d1), SimpleDate::new(y2, m2, d2)).unwrap();
        let a = to_ad(y1, m1, d1).unwrap().date();
        let b = to_ad(y2, m2, d2).unwrap().date();
        assert_eq!(bs, ad_days_between(a, b).unwrap(), "BS {y1}/{m1}/{d1} -> {y2}/{m2}/{d2}");
    }
}

#[test]
fn days_between_is_antisymmetric() {
    let dates = [
        SimpleDate::new(1970, 1, 1),
        SimpleDate::new(1980, 12, 31),
        SimpleDate::new(2081, 5, 24),
        SimpleDate::new(2081, 6, 1),
        SimpleDate::new(2100, 12, 31),
    ];
    for &a in &dates {
        for &b in &dates {
            assert_eq!(
                days_between(a, b).unwrap(),
                -days_between(b, a).unwrap(),
                "days_between({a}, {b})"
            );
        }
    }
}

#[test]
fn adjust_matches_day_count() {
    let start = SimpleDate::new(2081, 5, 24);
    for delta in [-4000, -366, -31, -1, 1, 29, 365, 4000] {
        let cal = adjust_by_days(start.year(), start.month(), start.day(), delta).unwrap();
        assert_eq!(
            days_between(start, cal.date()).unwrap(),
            i64::from(delta),
            "adjust by {delta} landed on {}",
            cal.date()
        );
    }
}

#[test]
fn adjust_lands_on_month_start() {
    assert_eq!(
        adjust_by_days(2082, 4, 20, -19).unwrap(),
        resolve_bs_date(2082, 4, 1, DayOverflow::Strict).unwrap()
    );
}

#[test]
fn months_wrap_across_years() {
    for delta in -30..=30 {
        let m = add_months(2081, 6, delta).unwrap();
        let slot = 2081 * 12 + 5 + delta;
        assert_eq!((m.year(), m.month()), (slot / 12, (slot % 12) as u8 + 1), "delta {delta}");
        assert_eq!(m, resolve_month(m.year(), m.month()).unwrap());
    }
}

#[test]
fn consecutive_months_chain_weekdays() {
    let mut prev = resolve_month(2070, 1).unwrap();
    for delta in 1..120 {
        let next = add_months(2070, 1, delta).unwrap();
        let expected = if prev.last_day_of_month() == 7 { 1 } else { prev.last_day_of_month() + 1 };
        assert_eq!(
            next.first_day_of_month(),
            expected,
            "first weekday of {}/{}",
            next.year(),
            next.month()
        );
        prev = next;
    }
}
