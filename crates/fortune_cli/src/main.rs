use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use fortune_config::GradeScale;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "fortune", about = "Saju and astrology fortune scoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScaleArg {
    /// Six-tier monthly calendar grades
    Calendar,
    /// Five-tier daily grades
    Daily,
}

impl From<ScaleArg> for GradeScale {
    fn from(s: ScaleArg) -> Self {
        match s {
            ScaleArg::Calendar => GradeScale::Calendar,
            ScaleArg::Daily => GradeScale::Daily,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a civil date
    Pillars {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Clock hour 0-23, omitted when unknown
        #[arg(long)]
        hour: Option<u32>,
    },
    /// Relations between two branches (e.g. 자 오)
    Relation { a: String, b: String },
    /// Ten god of a stem relative to a day stem
    Sipsin { day_stem: String, stem: String },
    /// Aspect between two ecliptic longitudes
    Aspect {
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon_a: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon_b: f64,
    },
    /// Score days for a natal profile read from a JSON file
    Analyze {
        /// Input JSON (birthDate, birthHour, planets, transits or month)
        #[arg(long)]
        input: PathBuf,
        /// Scoring config TOML; defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "daily")]
        scale: ScaleArg,
    },
    /// Lucky number and color for a date
    Lucky {
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: NaiveDate,
    },
    /// Check a generated report for required sections and cross references
    Validate {
        /// Theme: life, love, career, wealth, health, family, newyear
        #[arg(long)]
        theme: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Strip active HTML/script content from a report
    Sanitize {
        #[arg(long)]
        file: PathBuf,
    },
    /// Deterministic cache key for a person and target
    CacheKey {
        #[arg(long, default_value = "daily")]
        namespace: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,
        /// Birth time (HH:MM:SS), omitted when unknown
        #[arg(long)]
        birth_time: Option<NaiveTime>,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Target date or month appended to the key
        #[arg(long)]
        target: Option<String>,
    },
}

fn run(command: Commands) -> Result<Value, CliError> {
    match command {
        Commands::Pillars { date, hour } => commands::pillars(date, hour),
        Commands::Relation { a, b } => commands::relation(&a, &b),
        Commands::Sipsin { day_stem, stem } => commands::ten_god(&day_stem, &stem),
        Commands::Aspect { lon_a, lon_b } => Ok(commands::aspect(lon_a, lon_b)),
        Commands::Analyze {
            input,
            config,
            scale,
        } => commands::analyze(&input, config.as_deref(), scale.into()),
        Commands::Lucky { date, birth } => Ok(commands::lucky(date, birth)),
        Commands::Validate { theme, file } => commands::validate(&theme, &file),
        Commands::Sanitize { file } => commands::sanitize(&file).map(Value::String),
        Commands::CacheKey {
            namespace,
            birth_date,
            birth_time,
            lat,
            lon,
            target,
        } => Ok(Value::String(commands::cache_key(
            &namespace,
            birth_date,
            birth_time,
            lat,
            lon,
            target.as_deref(),
        ))),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        // Plain strings (sanitized text, cache keys) print unquoted
        Ok(Value::String(s)) => println!("{s}"),
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to encode output: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
