use super::util::{day_number, GREGORIAN_YEAR_OFFSET};
use super::ConversionError;
use crate::table::EquinoxTable;
use chrono::{Datelike, NaiveDate};

fn equinox(table: &EquinoxTable, gregorian_year: i32) -> Result<NaiveDate, ConversionError> {
    table
        .equinox_date(gregorian_year)
        .ok_or_else(|| ConversionError::no_equinox(gregorian_year))
}

/// Année républicaine et rang du jour pour une date civile locale.
///
/// Avant l'équinoxe de son année grégorienne, la date appartient à l'année
/// commencée à l'équinoxe précédente.
pub(super) fn locate(table: &EquinoxTable, date: NaiveDate) -> Result<(i32, u16), ConversionError> {
    let gregorian_year = date.year();
    let this_year = equinox(table, gregorian_year)?;
    let first_day = if date < this_year {
        equinox(table, gregorian_year - 1)?
    } else {
        this_year
    };

    let day_of_year = day_number(date) - day_number(first_day);
    Ok((
        first_day.year() - GREGORIAN_YEAR_OFFSET,
        day_of_year as u16,
    ))
}

pub(super) fn year_start(table: &EquinoxTable, year: i32) -> Result<NaiveDate, ConversionError> {
    let gregorian_year = year
        .checked_add(GREGORIAN_YEAR_OFFSET)
        .ok_or_else(|| ConversionError::out_of_range(year))?;
    equinox(table, gregorian_year)
}

pub(super) fn year_length(table: &EquinoxTable, year: i32) -> Result<u16, ConversionError> {
    let first_day = year_start(table, year)?;
    let next = year_start(
        table,
        year.checked_add(1)
            .ok_or_else(|| ConversionError::out_of_range(year))?,
    )?;
    u16::try_from(day_number(next) - day_number(first_day))
        .map_err(|_| ConversionError::out_of_range(year))
}
