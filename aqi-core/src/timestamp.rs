use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Date format used for `date_local` and for the `date` column in SQLite: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Combined timestamp format stored in SQLite: "YYYY-MM-DD HH:MM:SS"
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date layouts accepted in `date_local`, tried in order.
const DATE_FORMATS: [&str; 3] = [DATE_FORMAT, "%Y/%m/%d", "%m/%d/%Y"];

/// Time layouts accepted in `time_local`, tried in order.
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Combine a `date_local` and `time_local` cell into one timestamp.
///
/// Returns `None` when either part is empty or does not parse; such rows are
/// dropped by the loader.
pub fn parse_local_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date.trim())?;
    let time = parse_time(time.trim())?;
    Some(date.and_time(time))
}

/// Parse a date string in any of the accepted `date_local` layouts.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
