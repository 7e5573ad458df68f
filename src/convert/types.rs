use crate::model::FrenchDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Méthode de calcul du 1er vendémiaire de chaque année.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CalculationMethod {
    /// Jour de l'équinoxe d'automne à Paris.
    #[default]
    Equinox,
    /// Règle bissextile grégorienne appliquée aux années républicaines.
    Romme,
    /// Bissextile tous les 4 ans, sauf tous les 128 ans.
    VonMadler,
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 3] = [
        CalculationMethod::Equinox,
        CalculationMethod::Romme,
        CalculationMethod::VonMadler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMethod::Equinox => "equinox",
            CalculationMethod::Romme => "romme",
            CalculationMethod::VonMadler => "von-madler",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown calculation method: {0} (expected equinox, romme or von-madler)")]
pub struct ParseMethodError(String);

impl FromStr for CalculationMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equinox" | "equinoxe" => Ok(CalculationMethod::Equinox),
            "romme" => Ok(CalculationMethod::Romme),
            "von-madler" | "von_madler" | "vonmadler" | "madler" => {
                Ok(CalculationMethod::VonMadler)
            }
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Équinoxe absente de la table, ou date hors de la plage représentable.
    #[error("unsupported date (year {year}): {reason}")]
    UnsupportedDate { year: i32, reason: &'static str },
    #[error("invalid French date {date}: {reason}")]
    InvalidDate {
        date: FrenchDate,
        reason: &'static str,
    },
}

impl ConversionError {
    pub(crate) fn no_equinox(gregorian_year: i32) -> Self {
        ConversionError::UnsupportedDate {
            year: gregorian_year,
            reason: "no autumn equinox on record for this Gregorian year",
        }
    }

    pub(crate) fn out_of_range(french_year: i32) -> Self {
        ConversionError::UnsupportedDate {
            year: french_year,
            reason: "French year outside the representable Gregorian range",
        }
    }
}
