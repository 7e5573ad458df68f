use crate::model::DAYS_IN_MONTH;
use chrono::{Datelike, NaiveDate};

/// An 1 = année grégorienne + 1791 pour la méthode de l'équinoxe.
pub(super) const GREGORIAN_YEAR_OFFSET: i32 = 1791;

/// 1792-09-22, 1er vendémiaire an 1 (jours depuis le 0001-01-01 inclus).
pub(super) const ERA_START: i64 = 654_415;
/// 1811-09-23, 1er vendémiaire an 20 : fin de la période d'usage.
pub(super) const ERA_END: i64 = 661_354;
pub(super) const ERA_END_YEAR: i32 = 20;

/// Années dont le début tombe dans la période d'usage.
pub(super) const HISTORICAL_YEARS: std::ops::RangeInclusive<i32> = 1..=ERA_END_YEAR - 1;

pub(super) fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

pub(super) fn date_from_day_number(days: i64) -> Option<NaiveDate> {
    i32::try_from(days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

pub(super) fn in_historical_window(date: NaiveDate) -> bool {
    (ERA_START..ERA_END).contains(&day_number(date))
}

/// Rang du jour (à partir de 0) → (mois, jour du mois).
///
/// Au-delà du 360e jour, le résultat tombe dans le mois 13. Le rang doit être
/// inférieur à 366.
pub fn split_day_of_year(day_of_year: u16) -> (u8, u8) {
    debug_assert!(day_of_year < 366, "day of year {day_of_year} out of range");
    let month = day_of_year / u16::from(DAYS_IN_MONTH) + 1;
    let day = day_of_year % u16::from(DAYS_IN_MONTH) + 1;
    (month as u8, day as u8)
}

/// (mois, jour du mois) → rang du jour à partir de 0.
///
/// Suppose `month >= 1` et `day_of_month >= 1` : un zéro est compté comme 1.
pub fn join_day_of_year(month: u8, day_of_month: u8) -> u16 {
    u16::from(month.saturating_sub(1)) * u16::from(DAYS_IN_MONTH)
        + u16::from(day_of_month.saturating_sub(1))
}
