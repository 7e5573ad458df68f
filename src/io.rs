use crate::convert::{CalculationMethod, Converter};
use crate::model::{DayKind, FrenchDate, GregorianInstant};
use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Résultat d'une conversion, prêt à l'export.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub gregorian: GregorianInstant,
    pub french: FrenchDate,
    pub kind: DayKind,
    pub method: CalculationMethod,
}

/// Instant grégorien : RFC3339 (décalage conservé), sinon `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` ou `YYYY-MM-DD`, pris en UTC.
pub fn parse_instant(raw: &str) -> anyhow::Result<GregorianInstant> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.fix().from_utc_datetime(&naive));
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date/datetime: {raw}"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("invalid midnight conversion")?;
    Ok(Utc.fix().from_utc_datetime(&midnight))
}

/// Date républicaine `A-M-J[ h:m:s]` ; l'année peut être négative.
pub fn parse_french(raw: &str) -> anyhow::Result<FrenchDate> {
    let mut tokens = raw.split_whitespace();
    let date_part = tokens.next().context("empty French date")?;

    let (negative, unsigned) = match date_part.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, date_part),
    };
    let fields: Vec<&str> = unsigned.split('-').collect();
    let [year, month, day] = fields.as_slice() else {
        bail!("expected year-month-day, got {date_part:?}");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {date_part:?}"))?;
    let year = if negative { -year } else { year };
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid month in {date_part:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid day in {date_part:?}"))?;

    let (hour, minute, second) = match tokens.next() {
        None => (0, 0, 0),
        Some(time_part) => {
            let fields: Vec<&str> = time_part.split(':').collect();
            let [hour, minute, second] = fields.as_slice() else {
                bail!("expected hour:minute:second, got {time_part:?}");
            };
            (
                hour.parse::<u8>().context("decimal hour")?,
                minute.parse::<u8>().context("decimal minute")?,
                second.parse::<u8>().context("decimal second")?,
            )
        }
    };
    if tokens.next().is_some() {
        bail!("unexpected trailing input in {raw:?}");
    }

    Ok(FrenchDate::with_time(year, month, day, hour, minute, second))
}

/// Décalage UTC : `Z`, `UTC`, `+HH:MM`, `-HH:MM` ou `+HH`.
pub fn parse_offset(raw: &str) -> anyhow::Result<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    let (sign, rest) = match (raw.strip_prefix('+'), raw.strip_prefix('-')) {
        (Some(rest), _) => (1, rest),
        (_, Some(rest)) => (-1, rest),
        _ => bail!("offset must start with + or -: {raw}"),
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = hours
        .parse()
        .with_context(|| format!("invalid offset hours: {raw}"))?;
    let minutes: i32 = minutes
        .parse()
        .with_context(|| format!("invalid offset minutes: {raw}"))?;
    if minutes >= 60 {
        bail!("invalid offset minutes: {raw}");
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .with_context(|| format!("offset out of range: {raw}"))
}

/// Import d'instants depuis CSV : colonne `gregorian` (sinon la première).
pub fn import_instants_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<GregorianInstant>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let column = rdr
        .headers()?
        .iter()
        .position(|h| h.trim() == "gregorian")
        .unwrap_or(0);

    let mut out = Vec::new();
    for (row, rec) in (2usize..).zip(rdr.records()) {
        let rec = rec?;
        let raw = rec
            .get(column)
            .with_context(|| format!("row {row}: missing gregorian value"))?;
        if raw.trim().is_empty() {
            continue;
        }
        let instant = parse_instant(raw).with_context(|| format!("row {row}"))?;
        out.push(instant);
    }
    Ok(out)
}

/// Convertit une série d'instants avec la même méthode.
pub fn convert_all(
    converter: &Converter<'_>,
    instants: &[GregorianInstant],
    method: CalculationMethod,
) -> anyhow::Result<Vec<Conversion>> {
    instants
        .iter()
        .map(|&gregorian| {
            let french = converter
                .to_french(gregorian, method)
                .with_context(|| format!("converting {}", gregorian.to_rfc3339()))?;
            Ok(Conversion {
                gregorian,
                french,
                kind: french.day_kind(),
                method,
            })
        })
        .collect()
}

/// Export CSV : header `gregorian,year,month,day,hour,minute,second,kind`
pub fn export_conversions_csv<P: AsRef<Path>>(
    path: P,
    conversions: &[Conversion],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    w.write_record([
        "gregorian", "year", "month", "day", "hour", "minute", "second", "kind",
    ])?;
    let mut fields: [itoa::Buffer; 6] = Default::default();
    for c in conversions {
        let [year, month, day, hour, minute, second] = &mut fields;
        let gregorian = c.gregorian.to_rfc3339();
        w.write_record([
            gregorian.as_str(),
            year.format(c.french.year),
            month.format(c.french.month),
            day.format(c.french.day_of_month),
            hour.format(c.french.hour),
            minute.format(c.french.minute),
            second.format(c.french.second),
            c.kind.as_str(),
        ])?;
    }
    let bytes = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV buffer: {}", e.error()))?;
    write_atomically(path, &bytes)
}

/// Export JSON (jolie mise en forme)
pub fn export_conversions_json<P: AsRef<Path>>(
    path: P,
    conversions: &[Conversion],
) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(conversions)?;
    write_atomically(path, &json)
}

/// Écrit via un fichier temporaire puis renommage.
fn write_atomically<P: AsRef<Path>>(path: P, bytes: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}
