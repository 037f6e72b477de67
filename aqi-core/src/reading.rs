//! The hourly `Reading` record and how it is read from the source CSV.
//!
//! The source file is `fresno_pm25_hourly_with_aqi_and_category.csv`, one row
//! per site per hour. Columns are located by header name so extra columns
//! and any column order are accepted:
//!
//! ```text
//! site_number,date_local,time_local,latitude,longitude,sample_measurement,aqi,aqi_category
//! 0004,2017-06-15,14:00,36.78538,-119.77321,8.2,34,Good
//! ```

use crate::category::AqiCategory;
use crate::timestamp::parse_local_timestamp;
use anyhow::anyhow;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use csv::StringRecord;
use serde::Serialize;

/// Columns the loader cannot do without.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "date_local",
    "time_local",
    "latitude",
    "longitude",
    "aqi",
    "aqi_category",
    "sample_measurement",
    "site_number",
];

/// A single hourly observation at one monitoring site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Reading {
    pub site_number: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Local date and time of the observation (`date_local` + `time_local`).
    pub timestamp: NaiveDateTime,
    pub aqi: Option<f64>,
    pub category: AqiCategory,
    /// Raw PM2.5 concentration in µg/m³.
    pub sample_measurement: Option<f64>,
}

impl Reading {
    /// Calendar date of the observation.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Hour of day (0-23) of the observation.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Build a Reading from one CSV record.
    ///
    /// Returns `None` for rows the loader drops: unparseable timestamp or
    /// missing/non-finite coordinates. Missing AQI, PM2.5 or category are
    /// kept as `None` / `Unknown`.
    pub fn from_record(record: &StringRecord, layout: &ColumnLayout) -> Option<Reading> {
        let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or("");

        let site = field(layout.site_number);
        let Some(timestamp) =
            parse_local_timestamp(field(layout.date_local), field(layout.time_local))
        else {
            log::debug!(
                "[AQI] dropping row for site {}: bad timestamp '{} {}'",
                site,
                field(layout.date_local),
                field(layout.time_local)
            );
            return None;
        };
        let (Some(latitude), Some(longitude)) = (
            parse_number(field(layout.latitude)),
            parse_number(field(layout.longitude)),
        ) else {
            log::debug!("[AQI] dropping row for site {} at {}: bad coordinates", site, timestamp);
            return None;
        };

        let category_cell = field(layout.aqi_category);
        let category = AqiCategory::from_label(if category_cell.is_empty() {
            None
        } else {
            Some(category_cell)
        });

        Some(Reading {
            site_number: site.to_string(),
            latitude,
            longitude,
            timestamp,
            aqi: parse_number(field(layout.aqi)),
            category,
            sample_measurement: parse_number(field(layout.sample_measurement)),
        })
    }
}

/// Parse a numeric cell, treating empty, `NaN` and infinite values as missing.
fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Positions of the required columns within a CSV header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date_local: usize,
    pub time_local: usize,
    pub latitude: usize,
    pub longitude: usize,
    pub aqi: usize,
    pub aqi_category: usize,
    pub sample_measurement: usize,
    pub site_number: usize,
}

impl ColumnLayout {
    /// Resolve column positions from a header row.
    ///
    /// Fails with the name of the first required column that is absent.
    pub fn from_headers(headers: &StringRecord) -> anyhow::Result<Self> {
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}') == name)
                .ok_or_else(|| anyhow!("missing required column '{}'", name))?;
        }
        let [date_local, time_local, latitude, longitude, aqi, aqi_category, sample_measurement, site_number] =
            positions;
        Ok(Self {
            date_local,
            time_local,
            latitude,
            longitude,
            aqi,
            aqi_category,
            sample_measurement,
            site_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &[&str] = &[
        "site_number",
        "date_local",
        "time_local",
        "latitude",
        "longitude",
        "sample_measurement",
        "aqi",
        "aqi_category",
    ];

    fn layout() -> ColumnLayout {
        ColumnLayout::from_headers(&StringRecord::from(HEADER.to_vec())).unwrap()
    }

    #[test]
    fn layout_follows_header_order() {
        let layout = layout();
        assert_eq!(layout.site_number, 0);
        assert_eq!(layout.date_local, 1);
        assert_eq!(layout.aqi_category, 7);
    }

    #[test]
    fn layout_ignores_extra_columns_and_bom() {
        let headers = StringRecord::from(vec![
            "\u{feff}state_code",
            "county_code",
            "site_number",
            "date_local",
            "time_local",
            "latitude",
            "longitude",
            "sample_measurement",
            "aqi",
            "aqi_category",
        ]);
        let layout = ColumnLayout::from_headers(&headers).unwrap();
        assert_eq!(layout.site_number, 2);
        assert_eq!(layout.aqi_category, 9);
    }

    #[test]
    fn layout_reports_missing_column() {
        let headers = StringRecord::from(vec!["date_local", "time_local", "latitude"]);
        let err = ColumnLayout::from_headers(&headers).unwrap_err();
        assert!(err.to_string().contains("longitude"), "{}", err);
    }

    #[test]
    fn parses_complete_row() {
        let record = StringRecord::from(vec![
            "0004", "2017-06-15", "14:00", "36.78538", "-119.77321", "8.2", "34", "Good",
        ]);
        let reading = Reading::from_record(&record, &layout()).unwrap();
        assert_eq!(reading.site_number, "0004");
        assert_eq!(reading.hour(), 14);
        assert_eq!(reading.date(), NaiveDate::from_ymd_opt(2017, 6, 15).unwrap());
        assert_eq!(reading.aqi, Some(34.0));
        assert_eq!(reading.sample_measurement, Some(8.2));
        assert_eq!(reading.category, AqiCategory::Good);
    }

    #[test]
    fn drops_rows_without_timestamp_or_coordinates() {
        let layout = layout();
        let rows = [
            vec!["0004", "", "14:00", "36.7", "-119.7", "8.2", "34", "Good"],
            vec!["0004", "2017-06-15", "", "36.7", "-119.7", "8.2", "34", "Good"],
            vec!["0004", "2017-06-15", "14:00", "", "-119.7", "8.2", "34", "Good"],
            vec!["0004", "2017-06-15", "14:00", "36.7", "NaN", "8.2", "34", "Good"],
            vec!["0004", "2017-06-15", "14:00", "north", "-119.7", "8.2", "34", "Good"],
        ];
        for row in rows {
            let record = StringRecord::from(row.clone());
            assert!(Reading::from_record(&record, &layout).is_none(), "{:?}", row);
        }
    }

    #[test]
    fn drops_rows_with_infinite_coordinates() {
        let layout = layout();
        for (lat, lon) in [("inf", "-119.7"), ("36.7", "-inf"), ("", "")] {
            let record = StringRecord::from(vec![
                "0004", "2017-06-15", "14:00", lat, lon, "8.2", "34", "Good",
            ]);
            assert!(Reading::from_record(&record, &layout).is_none(), "{} {}", lat, lon);
        }
    }

    #[test]
    fn keeps_rows_with_missing_measurements() {
        let record = StringRecord::from(vec![
            "0004", "2017-06-15", "14:00", "36.7", "-119.7", "", "", "",
        ]);
        let reading = Reading::from_record(&record, &layout()).unwrap();
        assert_eq!(reading.aqi, None);
        assert_eq!(reading.sample_measurement, None);
        assert_eq!(reading.category, AqiCategory::Unknown);
    }

    #[test]
    fn short_records_are_dropped_not_panicking() {
        let record = StringRecord::from(vec!["0004", "2017-06-15"]);
        assert!(Reading::from_record(&record, &layout()).is_none());
    }
}
