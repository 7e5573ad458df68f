#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use calrep::{convert::CalculationMethod, decimal, io, Converter};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Conversion grégorien ⇄ calendrier républicain
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Méthode : equinox, romme ou von-madler
    #[arg(long, global = true, default_value_t = CalculationMethod::Equinox)]
    method: CalculationMethod,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Date grégorienne → date républicaine
    ToFrench {
        /// RFC3339, ou `YYYY-MM-DD[ HH:MM:SS]` (UTC)
        #[arg(long)]
        date: String,
        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Date républicaine → date grégorienne
    ToGregorian {
        /// `A-M-J[ h:m:s]`, heure décimale
        #[arg(long)]
        date: String,
        /// Décalage UTC du résultat
        #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
        offset: String,
    },

    /// Heure civile → heure décimale
    DecimalTime {
        /// HH:MM:SS
        #[arg(long)]
        time: String,
    },

    /// Conversion d'un CSV (colonne `gregorian`) vers CSV ou JSON
    Batch {
        #[arg(long)]
        csv: String,
        /// `.json` pour un export JSON, CSV sinon
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let converter = Converter::new();

    match cli.cmd {
        Commands::ToFrench { date, json } => {
            let instant = io::parse_instant(&date)?;
            let french = converter.to_french(instant, cli.method)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&french)?);
            } else {
                println!("{french}");
            }
        }
        Commands::ToGregorian { date, offset } => {
            let french = io::parse_french(&date)?;
            let offset = io::parse_offset(&offset)?;
            let instant = converter.to_gregorian_at(french, cli.method, offset)?;
            println!("{}", instant.to_rfc3339());
        }
        Commands::DecimalTime { time } => {
            let time = chrono::NaiveTime::parse_from_str(time.trim(), "%H:%M:%S")
                .with_context(|| format!("invalid time (HH:MM:SS): {time}"))?;
            let (hour, minute, second) = decimal::decimal_time_of(time);
            println!("{hour}:{minute:02}:{second:02}");
        }
        Commands::Batch { csv, out } => batch(&converter, &csv, &out, cli.method)?,
    }

    Ok(())
}

fn batch(converter: &Converter<'_>, input: &str, out: &str, method: CalculationMethod) -> Result<()> {
    let instants = io::import_instants_csv(input)?;
    let conversions = io::convert_all(converter, &instants, method)?;
    if out.ends_with(".json") {
        io::export_conversions_json(out, &conversions)?;
    } else {
        io::export_conversions_csv(out, &conversions)?;
    }
    eprintln!("{} date(s) converted ({method})", conversions.len());
    Ok(())
}
