//! SQL schema for the in-memory readings table.

/// Returns the full SQL schema as a single batch string.
///
/// - `readings` - one row per loaded hourly observation. `datetime` holds the
///   combined local timestamp (`YYYY-MM-DD HH:MM:SS`); `date` and `hour` are
///   derived from it at load time and indexed together for the date/hour
///   selection.
///
/// Timestamp and coordinates are `NOT NULL`: rows without them never reach
/// the table.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS readings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        site_number TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        datetime TEXT NOT NULL,
        date TEXT NOT NULL,
        hour INTEGER NOT NULL CHECK (hour BETWEEN 0 AND 23),
        aqi REAL,
        aqi_category TEXT NOT NULL,
        sample_measurement REAL
    );
    CREATE INDEX IF NOT EXISTS idx_readings_date_hour ON readings(date, hour);
    CREATE INDEX IF NOT EXISTS idx_readings_site ON readings(site_number);
    "#
}
