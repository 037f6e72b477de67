//! Result structs returned by the loader and the summary queries.
//!
//! All structs derive `Serialize` so they can be logged or handed to the
//! page as JSON.

use aqi_core::category::AqiCategory;
use serde::Serialize;

/// Outcome of loading a CSV into the database.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows inserted into `readings`.
    pub loaded: usize,
    /// Rows skipped for a missing/unparseable timestamp or coordinates.
    pub dropped: usize,
}

impl LoadSummary {
    /// Data rows seen in the source file.
    pub fn total(&self) -> usize {
        self.loaded + self.dropped
    }
}

/// A monitoring site with its mean reported position.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteInfo {
    pub site_number: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Number of loaded readings for this site.
    pub readings: usize,
}

/// Number of loaded readings in one AQI category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CategoryCount {
    pub category: AqiCategory,
    pub count: usize,
}
