#![forbid(unsafe_code)]
use calrep::convert::leap;
use calrep::{complementary_days, to_french, to_gregorian, CalculationMethod, FrenchDate};
use chrono::{FixedOffset, TimeZone};

fn at(y: i32, m: u32, d: u32) -> calrep::GregorianInstant {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, m, d, 0, 0, 0)
        .unwrap()
}

fn romme(y: i32, m: u32, d: u32) -> String {
    let fd = to_french(at(y, m, d), CalculationMethod::Romme).unwrap();
    format!("{}-{:02}-{:02}", fd.year, fd.month, fd.day_of_month)
}

#[test]
fn reference_dates() {
    assert_eq!(romme(2011, 7, 8), "219-10-20");
    assert_eq!(romme(2010, 12, 25), "219-04-05");
    assert_eq!(romme(2011, 9, 23), "220-01-02");
    assert_eq!(romme(1812, 9, 23), "21-01-01");
}

#[test]
fn end_of_historical_period() {
    assert_eq!(romme(1811, 9, 22), "19-13-05");
    assert_eq!(romme(1811, 9, 23), "20-01-01");
}

#[test]
fn equinox_applies_during_historical_period() {
    for (y, m, d) in [(1792, 9, 22), (1796, 8, 4), (1803, 9, 24), (1811, 9, 22)] {
        let romme = to_french(at(y, m, d), CalculationMethod::Romme).unwrap();
        let equinox = to_french(at(y, m, d), CalculationMethod::Equinox).unwrap();
        assert_eq!(romme, equinox, "{y}-{m}-{d}");
    }
}

#[test]
fn proleptic_years_before_the_republic() {
    assert_eq!(romme(1792, 9, 21), "0-13-06");
    assert_eq!(romme(1791, 9, 22), "0-01-01");
}

#[test]
fn year_224_month_boundaries() {
    let cases = [
        ((1, 1), "224-04-12"),
        ((1, 20), "224-05-01"),
        ((2, 19), "224-06-01"),
        ((2, 28), "224-06-10"),
        ((2, 29), "224-06-11"),
        ((3, 5), "224-06-16"),
        ((3, 20), "224-07-01"),
        ((3, 21), "224-07-02"),
        ((4, 20), "224-08-02"),
        ((4, 24), "224-08-06"),
    ];
    for ((m, d), expected) in cases {
        assert_eq!(romme(2016, m, d), expected, "2016-{m:02}-{d:02}");
    }
}

#[test]
fn leap_rule() {
    assert!(leap::romme(20));
    assert!(!leap::romme(21));
    assert!(leap::romme(224));
    assert!(!leap::romme(100));
    assert!(!leap::romme(300));
    assert!(leap::romme(400));
    assert!(leap::romme(0));
}

#[test]
fn complementary_days_per_year() {
    assert_eq!(complementary_days(20, CalculationMethod::Romme).unwrap(), 6);
    assert_eq!(complementary_days(21, CalculationMethod::Romme).unwrap(), 5);
    assert_eq!(complementary_days(128, CalculationMethod::Romme).unwrap(), 6);
    assert_eq!(complementary_days(200, CalculationMethod::Romme).unwrap(), 5);
    // ans 1 à 19 : équinoxe
    assert_eq!(complementary_days(3, CalculationMethod::Romme).unwrap(), 6);
    assert_eq!(complementary_days(19, CalculationMethod::Romme).unwrap(), 5);
}

#[test]
fn reverse_conversion() {
    let g = to_gregorian(FrenchDate::new(20, 1, 1), CalculationMethod::Romme).unwrap();
    assert_eq!(g.to_rfc3339(), "1811-09-23T00:00:00+00:00");

    let g = to_gregorian(FrenchDate::new(219, 10, 20), CalculationMethod::Romme).unwrap();
    assert_eq!(g.to_rfc3339(), "2011-07-08T00:00:00+00:00");

    let g = to_gregorian(FrenchDate::new(0, 13, 6), CalculationMethod::Romme).unwrap();
    assert_eq!(g.to_rfc3339(), "1792-09-21T00:00:00+00:00");
}

#[test]
fn far_future_does_not_need_the_table() {
    let g = to_gregorian(FrenchDate::new(5000, 1, 1), CalculationMethod::Romme).unwrap();
    let back = to_french(g, CalculationMethod::Romme).unwrap();
    assert_eq!(back, FrenchDate::new(5000, 1, 1));
}
