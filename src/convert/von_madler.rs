//! Méthode de von Mädler : bissextile tous les 4 ans, sauf tous les 128 ans.
//!
//! Jours comptés depuis le 1791-09-23, 1er vendémiaire an 0. De l'an 129 à
//! l'an 256 (1920-2047), l'année commence toujours le 23 septembre.

use super::util::{date_from_day_number, day_number};
use chrono::NaiveDate;

/// 1791-09-23 (jours depuis le 0001-01-01 inclus).
const EPOCH: i64 = 654_050;

/// 365 + 1/4 - 1/128 jours, exprimés en 128e de jour.
const YEAR_IN_128THS: i64 = 46_751;

pub fn is_leap(year: i32) -> bool {
    year.rem_euclid(4) == 0 && year.rem_euclid(128) != 0
}

/// Jours écoulés entre le début de l'an 0 et le début de `year`.
fn days_before(year: i64) -> i64 {
    365 * year + (year - 1).div_euclid(4) - (year - 1).div_euclid(128)
}

pub(super) fn year_start(year: i32) -> Option<NaiveDate> {
    date_from_day_number(EPOCH + days_before(i64::from(year)))
}

pub(super) fn year_length(year: i32) -> u16 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

pub(super) fn locate(date: NaiveDate) -> (i32, u16) {
    let days = day_number(date) - EPOCH;

    let mut year = (days * 128).div_euclid(YEAR_IN_128THS);
    while days_before(year) > days {
        year -= 1;
    }
    while days_before(year + 1) <= days {
        year += 1;
    }

    (year as i32, (days - days_before(year)) as u16)
}
