#![forbid(unsafe_code)]
use calrep::{active_method, active_method_for_year, CalculationMethod};
use chrono::NaiveDate;

#[test]
fn parse_names_and_aliases() {
    for (raw, method) in [
        ("equinox", CalculationMethod::Equinox),
        ("Equinoxe", CalculationMethod::Equinox),
        ("ROMME", CalculationMethod::Romme),
        ("von-madler", CalculationMethod::VonMadler),
        ("von_madler", CalculationMethod::VonMadler),
        (" madler ", CalculationMethod::VonMadler),
    ] {
        assert_eq!(raw.parse::<CalculationMethod>().unwrap(), method, "{raw}");
    }
    let err = "julian".parse::<CalculationMethod>().unwrap_err();
    assert!(err.to_string().contains("julian"));
}

#[test]
fn display_round_trips() {
    for method in CalculationMethod::ALL {
        assert_eq!(method.to_string().parse::<CalculationMethod>().unwrap(), method);
    }
    assert_eq!(CalculationMethod::default(), CalculationMethod::Equinox);
}

#[test]
fn equinox_override_window() {
    let at = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap();

    assert_eq!(active_method(at(1792, 9, 21), CalculationMethod::Romme), CalculationMethod::Romme);
    assert_eq!(active_method(at(1792, 9, 22), CalculationMethod::Romme), CalculationMethod::Equinox);
    assert_eq!(active_method(at(1811, 9, 22), CalculationMethod::VonMadler), CalculationMethod::Equinox);
    assert_eq!(active_method(at(1811, 9, 23), CalculationMethod::VonMadler), CalculationMethod::VonMadler);

    assert_eq!(active_method_for_year(0, CalculationMethod::Romme), CalculationMethod::Romme);
    assert_eq!(active_method_for_year(1, CalculationMethod::Romme), CalculationMethod::Equinox);
    assert_eq!(active_method_for_year(19, CalculationMethod::VonMadler), CalculationMethod::Equinox);
    assert_eq!(active_method_for_year(20, CalculationMethod::VonMadler), CalculationMethod::VonMadler);
}
