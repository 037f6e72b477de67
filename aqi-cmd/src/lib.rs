//! Command implementations for the AQI CLI.
//!
//! Both subcommands load a readings CSV (plain or gzip) into the same
//! in-memory table the map page uses, then report on it.

use aqi_core::compression::{gunzip_to_string, is_gzip};
use aqi_core::selection::HourOfDay;
use aqi_db::Database;
use anyhow::Context;
use chrono::NaiveDate;
use clap::Subcommand;
use std::path::Path;

pub mod inspect;
pub mod select;

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a readings CSV: load counts, date range, sites and categories
    Inspect {
        /// Path to the readings CSV (may be gzip-compressed)
        #[arg(short = 'c', long)]
        csv: String,
    },

    /// Print the readings for one date and hour, as the map would show them
    Select {
        /// Path to the readings CSV (may be gzip-compressed)
        #[arg(short = 'c', long)]
        csv: String,

        /// Calendar date, YYYY-MM-DD
        #[arg(short = 'd', long)]
        date: NaiveDate,

        /// Hour of day, 0-23
        #[arg(short = 'H', long, default_value_t = HourOfDay::default())]
        hour: HourOfDay,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Inspect { csv } => {
            let db = open_readings(&csv)?;
            print!("{}", inspect::run_inspect(&db)?);
            Ok(())
        }
        Command::Select { csv, date, hour } => {
            let db = open_readings(&csv)?;
            print!("{}", select::run_select(&db, date, hour)?);
            Ok(())
        }
    }
}

/// Read a readings file and load it into a fresh database.
///
/// Gzip input is detected by a `.gz` extension or the gzip magic bytes.
pub fn open_readings(path: &str) -> anyhow::Result<Database> {
    let bytes = std::fs::read(path).with_context(|| format!("cannot read {}", path))?;
    let csv = decode_csv(Path::new(path), &bytes)?;
    let db = Database::new()?;
    let summary = db.load_readings(&csv)?;
    if summary.loaded == 0 {
        anyhow::bail!("{} contains no usable readings ({} dropped)", path, summary.dropped);
    }
    log::info!(
        "Loaded {} readings from {} ({} dropped)",
        summary.loaded,
        path,
        summary.dropped
    );
    Ok(db)
}

fn decode_csv(path: &Path, bytes: &[u8]) -> anyhow::Result<String> {
    let gz_ext = path.extension().is_some_and(|ext| ext == "gz");
    if gz_ext || is_gzip(bytes) {
        gunzip_to_string(bytes)
    } else {
        String::from_utf8(bytes.to_vec())
            .with_context(|| format!("{} is not valid UTF-8", path.display()))
    }
}
