//! Types behind the date and hour selectors.

use crate::timestamp::format_date;
use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;
use std::fmt;

/// Date the page opens on when the dataset covers it.
pub const DEFAULT_DATE: (i32, u32, u32) = (2017, 6, 15);

/// Hour the page opens on.
pub const DEFAULT_HOUR: u32 = 14;

/// An hour of the day, 0 through 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HourOfDay(u32);

impl HourOfDay {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 23;

    pub fn new(hour: u32) -> anyhow::Result<Self> {
        if hour > Self::MAX {
            anyhow::bail!("hour must be between {} and {}, got {}", Self::MIN, Self::MAX, hour);
        }
        Ok(Self(hour))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for HourOfDay {
    fn default() -> Self {
        Self(DEFAULT_HOUR)
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for HourOfDay {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hour: u32 = s.trim().parse()?;
        Self::new(hour)
    }
}

/// Earliest and latest calendar dates present in the loaded table.
///
/// The date slider works in whole-day offsets from `min`.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    /// Bounds from two dates in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Number of days between `min` and `max`; the slider's maximum offset.
    pub fn span_days(&self) -> i64 {
        (self.max - self.min).num_days()
    }

    /// Clamp a date into the bounds.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    /// Offset of a (clamped) date from `min`.
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        (self.clamp(date) - self.min).num_days()
    }

    /// Date at a slider offset, clamped into the bounds.
    pub fn date_at(&self, offset: i64) -> NaiveDate {
        let offset = offset.clamp(0, self.span_days());
        TimeDelta::try_days(offset)
            .and_then(|delta| self.min.checked_add_signed(delta))
            .unwrap_or(self.max)
    }

    /// The opening date: 2017-06-15 if covered, otherwise the nearest bound.
    pub fn default_date(&self) -> NaiveDate {
        let (y, m, d) = DEFAULT_DATE;
        NaiveDate::from_ymd_opt(y, m, d)
            .map(|date| self.clamp(date))
            .unwrap_or(self.min)
    }
}

/// The count line shown above the map.
pub fn selection_summary(count: usize, date: &NaiveDate, hour: HourOfDay) -> String {
    format!(
        "🧭 {} monitors found for {} @ {}:00",
        count,
        format_date(date),
        hour
    )
}
