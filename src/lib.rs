#![forbid(unsafe_code)]
//! Calrep : conversion entre calendrier grégorien et calendrier républicain.
//!
//! - Trois méthodes pour le 1er vendémiaire : équinoxe, Romme, von Mädler.
//! - Méthode de l'équinoxe imposée entre 1792-09-22 et 1811-09-23.
//! - Heure décimale (10 h, 100 min, 100 s).
//! - Calculs sur la date civile locale de l'instant fourni ; aucune base de
//!   fuseaux horaires.

pub mod convert;
pub mod decimal;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod table;

pub use convert::{
    active_method, active_method_for_year, complementary_days, join_day_of_year,
    split_day_of_year, to_french, to_gregorian, CalculationMethod, ConversionError, Converter,
    ParseMethodError,
};
pub use decimal::{decimal_time, gregorian_time};
pub use model::{classify, DayKind, FrenchDate, GregorianInstant};
pub use table::{EquinoxTable, TableError};
