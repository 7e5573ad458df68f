use chrono::{DateTime, FixedOffset};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Instant grégorien : date civile locale + décalage UTC (heure d'été comprise).
pub type GregorianInstant = DateTime<FixedOffset>;

/// Nombre de jours des mois ordinaires (vendémiaire → fructidor).
pub const DAYS_IN_MONTH: u8 = 30;

/// Mois des jours complémentaires (sansculottides).
pub const COMPLEMENTARY_MONTH: u8 = 13;

/// Date du calendrier républicain, heure décimale comprise.
///
/// L'an 1 commence le 22 septembre 1792 ; l'an 0 et les années négatives sont
/// des extensions proleptiques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrenchDate {
    pub year: i32,
    /// 1 à 13 ; 13 = jours complémentaires.
    pub month: u8,
    /// 1 à 30 ; 1 à 5 (ou 6) pour le mois 13.
    pub day_of_month: u8,
    /// 0 à 9.
    pub hour: u8,
    /// 0 à 99.
    pub minute: u8,
    /// 0 à 99.
    pub second: u8,
}

impl FrenchDate {
    /// Date à minuit décimal.
    pub fn new(year: i32, month: u8, day_of_month: u8) -> Self {
        Self::with_time(year, month, day_of_month, 0, 0, 0)
    }

    pub fn with_time(
        year: i32,
        month: u8,
        day_of_month: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day_of_month,
            hour,
            minute,
            second,
        }
    }

    /// Jour dans la décade, de 1 (primidi) à 10 (décadi).
    pub fn day_in_week(&self) -> u8 {
        self.day_of_month.saturating_sub(1) % 10 + 1
    }

    /// Décade dans le mois, de 1 à 3.
    pub fn week_in_month(&self) -> u8 {
        self.day_of_month.saturating_sub(1) / 10 + 1
    }

    /// Rang du jour dans l'année, à partir de 0. Significatif seulement pour
    /// une date aux bornes valides.
    pub fn day_of_year(&self) -> u16 {
        crate::convert::join_day_of_year(self.month, self.day_of_month)
    }

    pub fn day_kind(&self) -> DayKind {
        classify(self.month, self.day_of_month)
    }

    pub fn is_complementary(&self) -> bool {
        self.month == COMPLEMENTARY_MONTH
    }

    /// Vérifie les bornes indépendantes de l'année.
    ///
    /// La longueur exacte du mois 13 dépend de l'année et de la méthode ; elle
    /// est contrôlée lors de la conversion.
    pub(crate) fn check_ranges(&self) -> Result<(), &'static str> {
        if !(1..=COMPLEMENTARY_MONTH).contains(&self.month) {
            return Err("month must be between 1 and 13");
        }
        let max_day = if self.is_complementary() { 6 } else { DAYS_IN_MONTH };
        if !(1..=max_day).contains(&self.day_of_month) {
            return Err("day of month out of range");
        }
        if self.hour > 9 {
            return Err("decimal hour must be between 0 and 9");
        }
        if self.minute > 99 || self.second > 99 {
            return Err("decimal minute and second must be between 0 and 99");
        }
        Ok(())
    }
}

impl fmt::Display for FrenchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day_of_month, self.hour, self.minute, self.second
        )
    }
}

/// Type d'objet associé à chaque jour de l'année.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayKind {
    Plant,
    Animal,
    Tool,
    Mineral,
    Concept,
}

impl DayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Plant => "plant",
            DayKind::Animal => "animal",
            DayKind::Tool => "tool",
            DayKind::Mineral => "mineral",
            DayKind::Concept => "concept",
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classe un jour : concepts pour les sansculottides, outils les décadis,
/// animaux les quintidis, minéraux en nivôse, plantes sinon.
pub fn classify(month: u8, day_of_month: u8) -> DayKind {
    if month == COMPLEMENTARY_MONTH {
        DayKind::Concept
    } else if day_of_month % 10 == 0 {
        DayKind::Tool
    } else if day_of_month % 5 == 0 {
        DayKind::Animal
    } else if month == 4 {
        DayKind::Mineral
    } else {
        DayKind::Plant
    }
}
