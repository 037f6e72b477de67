//! Typed queries over the readings table.
//!
//! The page needs three of these: the date bounds for the slider, the
//! dataset centroid as the fallback map center, and the date/hour selection
//! itself. The rest back the CLI summaries.

use crate::models::{CategoryCount, SiteInfo};
use crate::Database;
use aqi_core::category::AqiCategory;
use aqi_core::map_view::GeoPoint;
use aqi_core::reading::Reading;
use aqi_core::selection::{DateBounds, HourOfDay};
use aqi_core::timestamp::{format_date, parse_date, DATETIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{params, Row};
use std::collections::HashMap;

impl Database {
    /// Select every reading taken on `date` during `hour`.
    ///
    /// An empty result is not an error. The table is only read, so repeated
    /// calls return the same rows (ordered by site, then load order).
    pub fn select_readings(
        &self,
        date: NaiveDate,
        hour: HourOfDay,
    ) -> anyhow::Result<Vec<Reading>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare_cached(
            "SELECT site_number, latitude, longitude, datetime, aqi, aqi_category, sample_measurement
             FROM readings
             WHERE date = ?1 AND hour = ?2
             ORDER BY site_number, id",
        )?;
        let rows = stmt
            .query_map(params![format_date(&date), hour.get()], row_to_reading)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AQI] query: select_readings({}, {}) returned {} records",
            date,
            hour,
            rows.len()
        );
        Ok(rows)
    }

    /// Total number of loaded readings.
    pub fn count_readings(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM readings", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Earliest and latest calendar dates present in the table.
    ///
    /// Fails when the table is empty.
    pub fn query_date_range(&self) -> anyhow::Result<DateBounds> {
        let conn = self.conn.borrow();
        let (min, max): (Option<String>, Option<String>) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM readings",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        match (min.as_deref().and_then(parse_date), max.as_deref().and_then(parse_date)) {
            (Some(min), Some(max)) => Ok(DateBounds::new(min, max)),
            _ => anyhow::bail!("No readings loaded"),
        }
    }

    /// Mean position of every loaded reading, `None` when the table is empty.
    pub fn query_centroid(&self) -> anyhow::Result<Option<GeoPoint>> {
        let conn = self.conn.borrow();
        let (lat, lon): (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT AVG(latitude), AVG(longitude) FROM readings",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(lat.zip(lon).map(|(latitude, longitude)| GeoPoint {
            latitude,
            longitude,
        }))
    }

    /// Every site with its mean reported position, ordered by site number.
    pub fn query_sites(&self) -> anyhow::Result<Vec<SiteInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT site_number, AVG(latitude), AVG(longitude), COUNT(*)
             FROM readings
             GROUP BY site_number
             ORDER BY site_number",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteInfo {
                    site_number: row.get(0)?,
                    latitude: row.get(1)?,
                    longitude: row.get(2)?,
                    readings: row.get::<_, i64>(3)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[AQI] query: query_sites returned {} records", rows.len());
        Ok(rows)
    }

    /// Reading counts for every AQI category, in legend order.
    ///
    /// Categories with no readings are included with a count of zero.
    pub fn query_category_counts(&self) -> anyhow::Result<Vec<CategoryCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT aqi_category, COUNT(*) FROM readings GROUP BY aqi_category",
        )?;
        let raw: Vec<(String, i64)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut counts: HashMap<AqiCategory, usize> = HashMap::new();
        for (label, count) in raw {
            *counts.entry(AqiCategory::from_label(Some(&label))).or_default() += count as usize;
        }
        Ok(AqiCategory::ALL
            .iter()
            .map(|category| CategoryCount {
                category: *category,
                count: counts.get(category).copied().unwrap_or(0),
            })
            .collect())
    }
}

fn row_to_reading(row: &Row<'_>) -> rusqlite::Result<Reading> {
    let datetime: String = row.get(3)?;
    let timestamp = NaiveDateTime::parse_from_str(&datetime, DATETIME_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    let category: String = row.get(5)?;
    Ok(Reading {
        site_number: row.get(0)?,
        latitude: row.get(1)?,
        longitude: row.get(2)?,
        timestamp,
        aqi: row.get(4)?,
        category: AqiCategory::from_label(Some(&category)),
        sample_measurement: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use aqi_core::category::{AqiCategory, DEFAULT_COLOR};
    use aqi_core::map_view::{render_map_view, FRESNO_CENTER};
    use aqi_core::selection::{selection_summary, HourOfDay};
    use chrono::{NaiveDate, Timelike};

    const SAMPLE_CSV: &str = "\
site_number,date_local,time_local,latitude,longitude,sample_measurement,aqi,aqi_category
0004,2017-06-15,14:00,36.78538,-119.77321,8.2,34,Good
0004,2017-06-15,15:00,36.78538,-119.77321,60.1,153,Unhealthy
0008,2017-06-15,14:00,36.81945,-119.71643,14.0,55,Moderate
0008,2017-06-15,23:00,36.81945,-119.71643,9.0,38,Good
0008,2017-06-16,00:00,36.81945,-119.71643,9.5,40,Good
5001,2017-06-15,14:00,36.63225,-120.38213,40.0,112,Severe Typo
";

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_readings(SAMPLE_CSV).unwrap();
        db
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hour(h: u32) -> HourOfDay {
        HourOfDay::new(h).unwrap()
    }

    #[test]
    fn select_returns_exact_date_and_hour_matches() {
        let db = sample_db();
        let rows = db.select_readings(date(2017, 6, 15), hour(14)).unwrap();
        assert_eq!(rows.len(), 3);
        for r in &rows {
            assert_eq!(r.date(), date(2017, 6, 15));
            assert_eq!(r.timestamp.hour(), 14);
        }
        let sites: Vec<&str> = rows.iter().map(|r| r.site_number.as_str()).collect();
        assert_eq!(sites, vec!["0004", "0008", "5001"]);
    }

    #[test]
    fn select_does_not_cross_midnight() {
        let db = sample_db();
        let late = db.select_readings(date(2017, 6, 15), hour(23)).unwrap();
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].hour(), 23);
        assert_eq!(late[0].date(), date(2017, 6, 15));

        let midnight = db.select_readings(date(2017, 6, 16), hour(0)).unwrap();
        assert_eq!(midnight.len(), 1);
        assert_eq!(midnight[0].date(), date(2017, 6, 16));

        let wrong_day = db.select_readings(date(2017, 6, 15), hour(0)).unwrap();
        assert!(wrong_day.is_empty());
    }

    #[test]
    fn select_is_idempotent() {
        let db = sample_db();
        let first = db.select_readings(date(2017, 6, 15), hour(14)).unwrap();
        let second = db.select_readings(date(2017, 6, 15), hour(14)).unwrap();
        assert_eq!(first, second);
        assert_eq!(db.count_readings().unwrap(), 6);
    }

    #[test]
    fn good_and_unhealthy_scenario() {
        let db = Database::new().unwrap();
        db.load_readings(
            "\
site_number,date_local,time_local,latitude,longitude,sample_measurement,aqi,aqi_category
0004,2017-06-15,14:00,36.78538,-119.77321,8.2,34,Good
0004,2017-06-15,15:00,36.78538,-119.77321,60.1,153,Unhealthy
",
        )
        .unwrap();

        let rows = db.select_readings(date(2017, 6, 15), hour(14)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, AqiCategory::Good);

        let view = render_map_view(&rows, FRESNO_CENTER);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers[0].color, "#00E400");
    }

    #[test]
    fn empty_selection_renders_with_zero_count() {
        let db = sample_db();
        let rows = db.select_readings(date(2001, 1, 1), hour(5)).unwrap();
        assert!(rows.is_empty());

        let fallback = db.query_centroid().unwrap().unwrap_or(FRESNO_CENTER);
        let view = render_map_view(&rows, fallback);
        assert!(view.markers.is_empty());
        assert!(view.center.latitude.is_finite() && view.center.longitude.is_finite());
        assert_eq!(
            selection_summary(rows.len(), &date(2001, 1, 1), hour(5)),
            "🧭 0 monitors found for 2001-01-01 @ 5:00"
        );
    }

    #[test]
    fn unrecognised_category_selects_as_unknown_gray() {
        let db = sample_db();
        let rows = db.select_readings(date(2017, 6, 15), hour(14)).unwrap();
        let typo = rows.iter().find(|r| r.site_number == "5001").unwrap();
        assert_eq!(typo.category, AqiCategory::Unknown);
        assert_eq!(typo.category.color(), DEFAULT_COLOR);
    }

    #[test]
    fn selected_readings_keep_measurements() {
        let db = sample_db();
        let rows = db.select_readings(date(2017, 6, 15), hour(15)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].aqi, Some(153.0));
        assert_eq!(rows[0].sample_measurement, Some(60.1));
        assert!((rows[0].latitude - 36.78538).abs() < 1e-9);
    }

    #[test]
    fn query_date_range_spans_loaded_dates() {
        let db = sample_db();
        let bounds = db.query_date_range().unwrap();
        assert_eq!(bounds.min, date(2017, 6, 15));
        assert_eq!(bounds.max, date(2017, 6, 16));
    }

    #[test]
    fn query_date_range_fails_when_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_date_range().is_err());
    }

    #[test]
    fn query_centroid_is_mean_of_all_readings() {
        let db = Database::new().unwrap();
        assert!(db.query_centroid().unwrap().is_none());

        let db = sample_db();
        let c = db.query_centroid().unwrap().unwrap();
        let expected_lat = (36.78538 * 2.0 + 36.81945 * 3.0 + 36.63225) / 6.0;
        assert!((c.latitude - expected_lat).abs() < 1e-9);
    }

    #[test]
    fn query_sites_groups_by_site_number() {
        let db = sample_db();
        let sites = db.query_sites().unwrap();
        assert_eq!(sites.len(), 3);
        assert_eq!(sites[0].site_number, "0004");
        assert_eq!(sites[0].readings, 2);
        assert_eq!(sites[1].readings, 3);
    }

    #[test]
    fn query_category_counts_covers_every_category() {
        let db = sample_db();
        let counts = db.query_category_counts().unwrap();
        assert_eq!(counts.len(), AqiCategory::ALL.len());

        let count_of = |c: AqiCategory| counts.iter().find(|cc| cc.category == c).unwrap().count;
        assert_eq!(count_of(AqiCategory::Good), 3);
        assert_eq!(count_of(AqiCategory::Moderate), 1);
        assert_eq!(count_of(AqiCategory::Unhealthy), 1);
        assert_eq!(count_of(AqiCategory::Unknown), 1);
        assert_eq!(count_of(AqiCategory::Hazardous), 0);
    }

    #[test]
    fn full_load_select_render_workflow() {
        let db = sample_db();
        let bounds = db.query_date_range().unwrap();
        let selected = bounds.default_date();
        assert_eq!(selected, date(2017, 6, 15));

        let rows = db.select_readings(selected, HourOfDay::default()).unwrap();
        let view = render_map_view(&rows, FRESNO_CENTER);
        assert_eq!(view.markers.len(), rows.len());

        let colors: Vec<&str> = view.markers.iter().map(|m| m.color).collect();
        assert_eq!(colors, vec!["#00E400", "#FFFF00", DEFAULT_COLOR]);
    }
}
