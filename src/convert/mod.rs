mod equinox;
mod romme;
mod types;
mod util;
mod von_madler;

pub use types::{CalculationMethod, ConversionError, ParseMethodError};
pub use util::{join_day_of_year, split_day_of_year};

use crate::decimal;
use crate::model::{FrenchDate, GregorianInstant};
use crate::table::EquinoxTable;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// Règles bissextiles explicites, sans table.
pub mod leap {
    pub use super::romme::is_leap as romme;
    pub use super::von_madler::is_leap as von_madler;
}

/// Convertisseur : encapsule la table d'équinoxes utilisée.
///
/// La méthode de calcul est un paramètre de chaque appel ; un même
/// convertisseur peut servir à plusieurs threads.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    table: &'a EquinoxTable,
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter<'static> {
    /// Convertisseur sur la table embarquée.
    pub fn new() -> Self {
        Self {
            table: EquinoxTable::global(),
        }
    }
}

impl<'a> Converter<'a> {
    pub fn with_table(table: &'a EquinoxTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a EquinoxTable {
        self.table
    }

    /// Grégorien → républicain.
    ///
    /// Entre le 1792-09-22 et le 1811-09-23 (exclu), la méthode de l'équinoxe
    /// s'applique quelle que soit `method`.
    pub fn to_french(
        &self,
        instant: GregorianInstant,
        method: CalculationMethod,
    ) -> Result<FrenchDate, ConversionError> {
        let local = instant.naive_local();
        let active = active_method(local, method);

        let (year, day_of_year) = self.locate(local.date(), active)?;
        let (month, day_of_month) = split_day_of_year(day_of_year);
        let (hour, minute, second) = decimal::decimal_time_of(local.time());

        Ok(FrenchDate::with_time(
            year,
            month,
            day_of_month,
            hour,
            minute,
            second,
        ))
    }

    /// Républicain → grégorien, au décalage UTC.
    pub fn to_gregorian(
        &self,
        date: FrenchDate,
        method: CalculationMethod,
    ) -> Result<GregorianInstant, ConversionError> {
        self.to_gregorian_at(date, method, Utc.fix())
    }

    /// Républicain → grégorien ; la date et l'heure civiles obtenues sont
    /// locales à `offset`.
    pub fn to_gregorian_at(
        &self,
        date: FrenchDate,
        method: CalculationMethod,
        offset: FixedOffset,
    ) -> Result<GregorianInstant, ConversionError> {
        let local = self.to_naive(date, method)?;
        offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| ConversionError::out_of_range(date.year))
    }

    fn to_naive(
        &self,
        date: FrenchDate,
        method: CalculationMethod,
    ) -> Result<NaiveDateTime, ConversionError> {
        date.check_ranges()
            .map_err(|reason| ConversionError::InvalidDate { date, reason })?;

        let active = active_method_for_year(date.year, method);
        if date.is_complementary() {
            let available = self
                .year_length_with(date.year, active)?
                .checked_sub(360)
                .ok_or_else(|| ConversionError::out_of_range(date.year))?;
            if u16::from(date.day_of_month) > available {
                return Err(ConversionError::InvalidDate {
                    date,
                    reason: "day exceeds the complementary days of this year",
                });
            }
        }

        let first_day = self.year_start_with(date.year, active)?;
        let day = util::date_from_day_number(
            util::day_number(first_day) + i64::from(date.day_of_year()),
        )
        .ok_or_else(|| ConversionError::out_of_range(date.year))?;

        Ok(day.and_time(decimal::naive_time_of(
            date.hour,
            date.minute,
            date.second,
        )))
    }

    /// Date grégorienne du 1er vendémiaire de `year`.
    pub fn year_start(
        &self,
        year: i32,
        method: CalculationMethod,
    ) -> Result<NaiveDate, ConversionError> {
        self.year_start_with(year, active_method_for_year(year, method))
    }

    /// Nombre de jours complémentaires (5 ou 6) de `year`.
    pub fn complementary_days(
        &self,
        year: i32,
        method: CalculationMethod,
    ) -> Result<u8, ConversionError> {
        let length = self.year_length_with(year, active_method_for_year(year, method))?;
        match length.checked_sub(360) {
            Some(days @ 5..=6) => Ok(days as u8),
            _ => Err(ConversionError::UnsupportedDate {
                year,
                reason: "year length is not 365 or 366 days",
            }),
        }
    }

    fn locate(
        &self,
        date: NaiveDate,
        method: CalculationMethod,
    ) -> Result<(i32, u16), ConversionError> {
        match method {
            CalculationMethod::Equinox => equinox::locate(self.table, date),
            CalculationMethod::Romme => Ok(romme::locate(date)),
            CalculationMethod::VonMadler => Ok(von_madler::locate(date)),
        }
    }

    fn year_start_with(
        &self,
        year: i32,
        method: CalculationMethod,
    ) -> Result<NaiveDate, ConversionError> {
        match method {
            CalculationMethod::Equinox => equinox::year_start(self.table, year),
            CalculationMethod::Romme => {
                romme::year_start(year).ok_or_else(|| ConversionError::out_of_range(year))
            }
            CalculationMethod::VonMadler => {
                von_madler::year_start(year).ok_or_else(|| ConversionError::out_of_range(year))
            }
        }
    }

    fn year_length_with(
        &self,
        year: i32,
        method: CalculationMethod,
    ) -> Result<u16, ConversionError> {
        match method {
            CalculationMethod::Equinox => equinox::year_length(self.table, year),
            CalculationMethod::Romme => Ok(romme::year_length(year)),
            CalculationMethod::VonMadler => Ok(von_madler::year_length(year)),
        }
    }
}

/// Méthode effectivement appliquée à une date-heure civile locale.
pub fn active_method(local: NaiveDateTime, method: CalculationMethod) -> CalculationMethod {
    if method != CalculationMethod::Equinox && util::in_historical_window(local.date()) {
        #[cfg(feature = "logging")]
        tracing::debug!(%local, requested = %method, "historical period, equinox method applies");
        return CalculationMethod::Equinox;
    }
    method
}

/// Méthode effectivement appliquée à une année républicaine (ans 1 à 19 :
/// équinoxe).
pub fn active_method_for_year(year: i32, method: CalculationMethod) -> CalculationMethod {
    if method != CalculationMethod::Equinox && util::HISTORICAL_YEARS.contains(&year) {
        #[cfg(feature = "logging")]
        tracing::debug!(year, requested = %method, "historical year, equinox method applies");
        return CalculationMethod::Equinox;
    }
    method
}

pub fn to_french(
    instant: GregorianInstant,
    method: CalculationMethod,
) -> Result<FrenchDate, ConversionError> {
    Converter::new().to_french(instant, method)
}

pub fn to_gregorian(
    date: FrenchDate,
    method: CalculationMethod,
) -> Result<GregorianInstant, ConversionError> {
    Converter::new().to_gregorian(date, method)
}

pub fn complementary_days(year: i32, method: CalculationMethod) -> Result<u8, ConversionError> {
    Converter::new().complementary_days(year, method)
}
