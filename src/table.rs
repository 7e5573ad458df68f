//! Table des équinoxes d'automne.
//!
//! Jour de septembre de l'équinoxe, au méridien de Paris (temps moyen,
//! UT+00:09:21), pour les années grégoriennes -1000 à 3000. Les données sont
//! précalculées et embarquées dans le binaire ; elles ne sont jamais
//! recalculées.

use chrono::NaiveDate;
use std::ops::RangeInclusive;
use std::sync::OnceLock;
use thiserror::Error;

const EQUINOX_MONTH: u32 = 9;

static RAW_DATA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/autumn_equinox.txt"
));

static GLOBAL: OnceLock<EquinoxTable> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: expected year {expected}, found {found}")]
    Gap {
        line: usize,
        expected: i32,
        found: i32,
    },
    #[error("line {line}: equinox day {day} is not a plausible September day")]
    ImplausibleDay { line: usize, day: u8 },
    #[error("line {line}: equinox of {year} is {length} days after the previous one")]
    ImplausibleYear { line: usize, year: i32, length: i64 },
    #[error("equinox table is empty")]
    Empty,
}

/// Correspondance année grégorienne → jour de l'équinoxe en septembre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquinoxTable {
    first_year: i32,
    days: Vec<u8>,
}

impl EquinoxTable {
    /// Table embarquée, analysée une seule fois.
    pub fn global() -> &'static EquinoxTable {
        GLOBAL.get_or_init(|| {
            Self::parse(RAW_DATA)
                .unwrap_or_else(|e| panic!("error parsing embedded equinox data: {e}"))
        })
    }

    /// Analyse le format texte : lignes `#` ignorées, puis
    /// `première_année jour jour ...` pour des années consécutives.
    pub fn parse(raw: &str) -> Result<Self, TableError> {
        let mut first_year = None;
        let mut days = Vec::new();

        for (line, text) in (1usize..).zip(raw.lines()) {
            let text = text.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let mut tokens = text.split_whitespace();
            let Some(year) = tokens.next() else {
                continue;
            };
            let year: i32 = year.parse().map_err(|_| TableError::InvalidNumber {
                line,
                token: year.to_string(),
            })?;

            let first = *first_year.get_or_insert(year);
            let expected = first + days.len() as i32;
            if year != expected {
                return Err(TableError::Gap {
                    line,
                    expected,
                    found: year,
                });
            }

            for token in tokens {
                let day: u8 = token.parse().map_err(|_| TableError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })?;
                if !(19..=25).contains(&day) {
                    return Err(TableError::ImplausibleDay { line, day });
                }
                let year = first + days.len() as i32;
                if let Some(&previous) = days.last() {
                    if let Some(length) = year_length(year - 1, previous, day) {
                        if !(365..=366).contains(&length) {
                            return Err(TableError::ImplausibleYear { line, year, length });
                        }
                    }
                }
                days.push(day);
            }
        }

        match first_year {
            Some(first_year) if !days.is_empty() => Ok(Self { first_year, days }),
            _ => Err(TableError::Empty),
        }
    }

    /// Jour de septembre de l'équinoxe, `None` hors de la plage couverte.
    pub fn lookup(&self, gregorian_year: i32) -> Option<u8> {
        let offset = i64::from(gregorian_year) - i64::from(self.first_year);
        usize::try_from(offset)
            .ok()
            .and_then(|idx| self.days.get(idx))
            .copied()
    }

    /// Date de l'équinoxe (minuit local).
    pub fn equinox_date(&self, gregorian_year: i32) -> Option<NaiveDate> {
        let day = self.lookup(gregorian_year)?;
        NaiveDate::from_ymd_opt(gregorian_year, EQUINOX_MONTH, u32::from(day))
    }

    /// Années couvertes.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.first_year + self.days.len() as i32 - 1
    }
}

/// Jours entre l'équinoxe de `year` et celle de l'année suivante.
fn year_length(year: i32, day: u8, next_day: u8) -> Option<i64> {
    let start = NaiveDate::from_ymd_opt(year, EQUINOX_MONTH, u32::from(day))?;
    let end = NaiveDate::from_ymd_opt(year + 1, EQUINOX_MONTH, u32::from(next_day))?;
    Some((end - start).num_days())
}
