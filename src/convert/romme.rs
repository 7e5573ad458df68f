//! Méthode de Romme : à partir de l'an 20 (1811-09-23), les années
//! républicaines suivent la règle bissextile grégorienne, appliquée à leur
//! propre numéro.

use super::util::{date_from_day_number, day_number, ERA_END, ERA_END_YEAR};
use chrono::NaiveDate;

/// Divisible par 4, sauf les siècles non divisibles par 400.
pub fn is_leap(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Jours écoulés entre le début de l'an 1 et le début de `year`.
fn days_before(year: i64) -> i64 {
    let y = year - 1;
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

pub(super) fn year_start(year: i32) -> Option<NaiveDate> {
    let since_era_end = days_before(i64::from(year)) - days_before(i64::from(ERA_END_YEAR));
    date_from_day_number(ERA_END + since_era_end)
}

pub(super) fn year_length(year: i32) -> u16 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

pub(super) fn locate(date: NaiveDate) -> (i32, u16) {
    let days = day_number(date) - ERA_END + days_before(i64::from(ERA_END_YEAR));

    // 146 097 jours par cycle de 400 ans ; l'estimation est corrigée ensuite
    let mut year = (days * 400).div_euclid(146_097) + 1;
    while days_before(year) > days {
        year -= 1;
    }
    while days_before(year + 1) <= days {
        year += 1;
    }

    (year as i32, (days - days_before(year)) as u16)
}
