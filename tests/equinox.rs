#![forbid(unsafe_code)]
use calrep::{to_french, to_gregorian, CalculationMethod, ConversionError, DayKind, FrenchDate};
use chrono::{FixedOffset, TimeZone};

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> calrep::GregorianInstant {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, mi, s)
        .unwrap()
}

fn french_ymd(y: i32, m: u32, d: u32) -> String {
    let fd = to_french(at(y, m, d, 0, 0, 0), CalculationMethod::Equinox).unwrap();
    format!("{}-{:02}-{:02}", fd.year, fd.month, fd.day_of_month)
}

#[test]
fn first_day_of_the_republic() {
    let fd = to_french(at(1792, 9, 22, 0, 0, 0), CalculationMethod::Equinox).unwrap();
    assert_eq!(fd, FrenchDate::with_time(1, 1, 1, 0, 0, 0));
}

#[test]
fn reference_dates() {
    assert_eq!(french_ymd(1796, 8, 4), "4-11-17");
    assert_eq!(french_ymd(2011, 7, 8), "219-10-19");
    assert_eq!(french_ymd(2009, 11, 17), "218-02-27");
    assert_eq!(french_ymd(2010, 12, 25), "219-04-04");
    assert_eq!(french_ymd(2014, 11, 29), "223-03-08");
}

#[test]
fn proleptic_years_before_the_republic() {
    assert_eq!(french_ymd(1792, 9, 21), "0-13-05");
    assert_eq!(french_ymd(1791, 9, 21), "-1-13-05");
    assert_eq!(french_ymd(1791, 9, 22), "-1-13-06");
}

#[test]
fn historical_new_years() {
    // ans 1 à 20, tels qu'appliqués de 1792 à 1811
    let starts = [
        (1792, 22), (1793, 22), (1794, 22), (1795, 23), (1796, 22),
        (1797, 22), (1798, 22), (1799, 23), (1800, 23), (1801, 23),
        (1802, 23), (1803, 24), (1804, 23), (1805, 23), (1806, 23),
        (1807, 24), (1808, 23), (1809, 23), (1810, 23), (1811, 23),
    ];
    for (year, (gy, day)) in (1..).zip(starts) {
        assert_eq!(french_ymd(gy, 9, day), format!("{year}-01-01"), "{gy}-09-{day}");
    }
}

#[test]
fn date_and_decimal_time() {
    let fd = to_french(at(1796, 8, 4, 11, 30, 30), CalculationMethod::Equinox).unwrap();
    assert_eq!(fd.to_string(), "4-11-17 04:79:51");
    assert_eq!(fd.day_kind(), DayKind::Plant);

    let fd = to_french(at(2014, 11, 29, 22, 59, 59), CalculationMethod::Equinox).unwrap();
    assert_eq!(fd.to_string(), "223-03-08 09:58:32");

    let fd = to_french(at(2014, 11, 29, 23, 59, 59), CalculationMethod::Equinox).unwrap();
    assert_eq!(fd.to_string(), "223-03-08 09:99:98");
}

#[test]
fn local_civil_time_is_used() {
    let paris = FixedOffset::east_opt(3600).unwrap();
    let late_evening = paris.with_ymd_and_hms(2014, 11, 29, 23, 30, 0).unwrap();
    let fd = to_french(late_evening, CalculationMethod::Equinox).unwrap();
    assert_eq!((fd.year, fd.month, fd.day_of_month), (223, 3, 8));
    assert_eq!(fd.hour, 9);
}

#[test]
fn year_outside_equinox_table() {
    let err = to_french(at(3001, 1, 1, 0, 0, 0), CalculationMethod::Equinox).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedDate { year: 3001, .. }), "{err}");

    // avant l'équinoxe de -1000, il faudrait celle de -1001
    let err = to_french(at(-1000, 3, 1, 0, 0, 0), CalculationMethod::Equinox).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedDate { year: -1001, .. }), "{err}");

    let fd = to_french(at(3000, 12, 1, 0, 0, 0), CalculationMethod::Equinox).unwrap();
    assert_eq!(fd.year, 1209);
}

#[test]
fn reverse_conversion() {
    let g = to_gregorian(FrenchDate::new(1, 1, 1), CalculationMethod::Equinox).unwrap();
    assert_eq!(g.to_rfc3339(), "1792-09-22T00:00:00+00:00");

    let g = to_gregorian(
        FrenchDate::with_time(4, 11, 17, 4, 79, 51),
        CalculationMethod::Equinox,
    )
    .unwrap();
    assert_eq!(g.to_rfc3339(), "1796-08-04T11:30:30+00:00");

    let g = to_gregorian(FrenchDate::new(12, 1, 1), CalculationMethod::Equinox).unwrap();
    assert_eq!(g.to_rfc3339(), "1803-09-24T00:00:00+00:00");
}

#[test]
fn reverse_conversion_needs_the_equinox() {
    let err = to_gregorian(FrenchDate::new(1210, 1, 1), CalculationMethod::Equinox).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedDate { year: 3001, .. }), "{err}");
}
