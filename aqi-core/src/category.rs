use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color for readings whose category is missing or not recognised.
pub const DEFAULT_COLOR: &str = "gray";

/// EPA AQI category as reported in the `aqi_category` column.
///
/// Anything that is not one of the six official labels (including an empty
/// cell) is `Unknown`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

impl AqiCategory {
    /// All categories in legend order, `Unknown` last.
    pub const ALL: [AqiCategory; 7] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
        AqiCategory::Unknown,
    ];

    /// Parse a raw `aqi_category` cell. Never fails.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("Good") => AqiCategory::Good,
            Some("Moderate") => AqiCategory::Moderate,
            Some("Unhealthy for Sensitive Groups") => AqiCategory::UnhealthyForSensitiveGroups,
            Some("Unhealthy") => AqiCategory::Unhealthy,
            Some("Very Unhealthy") => AqiCategory::VeryUnhealthy,
            Some("Hazardous") => AqiCategory::Hazardous,
            _ => AqiCategory::Unknown,
        }
    }

    /// The label as it appears in the source data.
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
            AqiCategory::Unknown => "Unknown",
        }
    }

    /// Marker color (outline and fill) for this category.
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#00E400",
            AqiCategory::Moderate => "#FFFF00",
            AqiCategory::UnhealthyForSensitiveGroups => "#FF7E00",
            AqiCategory::Unhealthy => "#FF0000",
            AqiCategory::VeryUnhealthy => "#8F3F97",
            AqiCategory::Hazardous => "#7E0023",
            AqiCategory::Unknown => DEFAULT_COLOR,
        }
    }
}

impl Default for AqiCategory {
    fn default() -> Self {
        AqiCategory::Unknown
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
