//! Heure décimale : 10 heures par jour, 100 minutes par heure, 100 secondes
//! par minute.
//!
//! Un jour compte 86 400 secondes civiles et 100 000 secondes décimales ; une
//! seconde décimale vaut donc 0,864 seconde civile. Les calculs se font en
//! entiers sur ce rapport.

use chrono::{NaiveTime, Timelike};

const CIVIL_SECONDS_PER_DAY: u32 = 86_400;
const DECIMAL_SECONDS_PER_DAY: u32 = 100_000;

/// Heure civile (0-23, 0-59, 0-59) → heure décimale (0-9, 0-99, 0-99).
///
/// La fraction du jour est tronquée à la seconde décimale, puis découpée par
/// divisions entières : 23:59:59 donne 9:99:98. Une entrée hors plage est
/// ramenée à 23:59:59.
pub fn decimal_time(hour: u32, minute: u32, second: u32) -> (u8, u8, u8) {
    debug_assert!(hour < 24 && minute < 60 && second < 60, "{hour}:{minute}:{second}");
    let civil = (u64::from(hour) * 3600 + u64::from(minute) * 60 + u64::from(second))
        .min(u64::from(CIVIL_SECONDS_PER_DAY - 1));
    let decimal =
        civil * u64::from(DECIMAL_SECONDS_PER_DAY) / u64::from(CIVIL_SECONDS_PER_DAY);
    split_decimal(decimal as u32)
}

/// Heure décimale → heure civile, arrondie à la seconde supérieure.
///
/// Inverse exact de [`decimal_time`] pour toute seconde civile. Une entrée
/// hors plage est ramenée à 9:99:99.
pub fn gregorian_time(hour: u8, minute: u8, second: u8) -> (u32, u32, u32) {
    let decimal = (u32::from(hour) * 10_000 + u32::from(minute) * 100 + u32::from(second))
        .min(DECIMAL_SECONDS_PER_DAY - 1);
    let civil = ((u64::from(decimal) * u64::from(CIVIL_SECONDS_PER_DAY)
        + u64::from(DECIMAL_SECONDS_PER_DAY - 1))
        / u64::from(DECIMAL_SECONDS_PER_DAY)) as u32;
    let civil = civil.min(CIVIL_SECONDS_PER_DAY - 1);
    (civil / 3600, civil / 60 % 60, civil % 60)
}

pub fn decimal_time_of(time: NaiveTime) -> (u8, u8, u8) {
    decimal_time(time.hour(), time.minute(), time.second())
}

pub fn naive_time_of(hour: u8, minute: u8, second: u8) -> NaiveTime {
    let (h, m, s) = gregorian_time(hour, minute, second);
    NaiveTime::from_num_seconds_from_midnight_opt(h * 3600 + m * 60 + s, 0)
        .unwrap_or(NaiveTime::MIN)
}

fn split_decimal(decimal: u32) -> (u8, u8, u8) {
    (
        (decimal / 10_000) as u8,
        (decimal / 100 % 100) as u8,
        (decimal % 100) as u8,
    )
}
