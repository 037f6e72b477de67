//! CSV loading for the readings table.
//!
//! # CSV Format
//!
//! Header row required. Columns are located by name; the loader needs
//! `date_local`, `time_local`, `latitude`, `longitude`, `aqi`,
//! `aqi_category`, `sample_measurement` and `site_number` and ignores any
//! others.
//!
//! ```text
//! site_number,date_local,time_local,latitude,longitude,sample_measurement,aqi,aqi_category
//! 0004,2017-06-15,14:00,36.78538,-119.77321,8.2,34,Good
//! ```

use crate::models::LoadSummary;
use crate::Database;
use anyhow::Context;
use aqi_core::reading::{ColumnLayout, Reading};
use aqi_core::timestamp::{format_date, DATETIME_FORMAT};
use rusqlite::params;

impl Database {
    /// Load readings from a CSV string.
    ///
    /// Rows whose `date_local` + `time_local` do not form a valid timestamp,
    /// or that lack latitude/longitude, are skipped and counted in
    /// [`LoadSummary::dropped`].
    ///
    /// # Errors
    ///
    /// A missing required column or a malformed CSV record fails the whole
    /// load; nothing is committed in that case.
    pub fn load_readings(&self, csv_data: &str) -> anyhow::Result<LoadSummary> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let layout = ColumnLayout::from_headers(&headers).context("cannot load readings")?;

        let tx = conn.unchecked_transaction()?;
        let mut summary = LoadSummary::default();
        {
            let mut stmt = tx.prepare(
                "INSERT INTO readings
                 (site_number, latitude, longitude, datetime, date, hour, aqi, aqi_category, sample_measurement)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for (line, result) in rdr.records().enumerate() {
                let r = result.with_context(|| format!("malformed CSV record {}", line + 1))?;
                let reading = match Reading::from_record(&r, &layout) {
                    Some(reading) => reading,
                    None => {
                        summary.dropped += 1;
                        continue;
                    }
                };

                stmt.execute(params![
                    reading.site_number,
                    reading.latitude,
                    reading.longitude,
                    reading.timestamp.format(DATETIME_FORMAT).to_string(),
                    format_date(&reading.date()),
                    reading.hour(),
                    reading.aqi,
                    reading.category.label(),
                    reading.sample_measurement,
                ])?;
                summary.loaded += 1;
            }
        }
        tx.commit()?;

        log::info!(
            "[AQI] loader: Loaded {} readings, dropped {} without timestamp or coordinates",
            summary.loaded,
            summary.dropped
        );
        Ok(summary)
    }
}
