//! `select`: the readings the map shows for one date and hour.

use aqi_core::map_view::{format_value, render_map_view, FRESNO_CENTER};
use aqi_core::selection::{selection_summary, HourOfDay};
use aqi_core::timestamp::DATETIME_FORMAT;
use aqi_db::Database;
use chrono::NaiveDate;
use std::fmt::Write;

/// Run the hourly filter and describe the result the way the map would draw it.
pub fn run_select(db: &Database, date: NaiveDate, hour: HourOfDay) -> anyhow::Result<String> {
    let readings = db.select_readings(date, hour)?;
    let fallback = db.query_centroid()?.unwrap_or(FRESNO_CENTER);
    let view = render_map_view(&readings, fallback);

    let mut out = String::new();
    for reading in &readings {
        writeln!(
            out,
            "{:<12} {}  AQI {:>5}  {:<32} {:<8} PM2.5 {:>6}",
            reading.site_number,
            reading.timestamp.format(DATETIME_FORMAT),
            format_value(reading.aqi),
            reading.category.label(),
            reading.category.color(),
            format_value(reading.sample_measurement)
        )?;
    }
    writeln!(out, "{}", selection_summary(readings.len(), &date, hour))?;
    writeln!(
        out,
        "Map center: {:.5}, {:.5} (zoom {})",
        view.center.latitude, view.center.longitude, view.zoom
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_db;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 6, d).unwrap()
    }

    #[test]
    fn lists_only_the_selected_hour() {
        let out = run_select(&sample_db(), day(15), HourOfDay::new(14).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("0004"));
        assert!(lines[0].contains("2017-06-15 14:00:00"));
        assert!(lines[0].contains("#00E400"));
        assert!(lines[2].starts_with("5001"));
        assert!(lines[2].contains("gray"));
        assert!(lines[2].contains("n/a"));
        assert!(out.contains("3 monitors found for 2017-06-15 @ 14:00"));
    }

    #[test]
    fn empty_selection_reports_zero_and_centroid() {
        let db = sample_db();
        let out = run_select(&db, day(15), HourOfDay::new(3).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("0 monitors found"));

        let centroid = db.query_centroid().unwrap().unwrap();
        assert_eq!(
            lines[1],
            format!(
                "Map center: {:.5}, {:.5} (zoom 10)",
                centroid.latitude, centroid.longitude
            )
        );
    }
}
