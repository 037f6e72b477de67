//! Marker rendering: selected readings to a Leaflet-ready map description.
//!
//! The page serializes a [`MapView`] to JSON and hands it to the JS bridge,
//! which draws one circle marker per entry inside a marker cluster group.

use crate::reading::Reading;
use serde::Serialize;

/// Zoom level the map opens at.
pub const DEFAULT_ZOOM: u8 = 10;

/// Circle marker radius in pixels.
pub const MARKER_RADIUS: u32 = 7;

/// Circle marker fill opacity.
pub const MARKER_FILL_OPACITY: f64 = 0.9;

/// CartoDB "dark_matter" basemap tiles.
pub const BASEMAP_TILES: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

pub const BASEMAP_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

/// Downtown Fresno; the center of last resort when nothing else is known.
pub const FRESNO_CENTER: GeoPoint = GeoPoint {
    latitude: 36.7378,
    longitude: -119.7871,
};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Arithmetic mean of a set of points, `None` when empty.
pub fn mean_center(points: impl IntoIterator<Item = GeoPoint>) -> Option<GeoPoint> {
    let (count, lat_sum, lon_sum) = points
        .into_iter()
        .fold((0usize, 0.0, 0.0), |(n, lat, lon), p| {
            (n + 1, lat + p.latitude, lon + p.longitude)
        });
    if count == 0 {
        return None;
    }
    Some(GeoPoint {
        latitude: lat_sum / count as f64,
        longitude: lon_sum / count as f64,
    })
}

/// One circle marker on the map.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    /// Used for both outline and fill.
    pub color: &'static str,
    pub radius: u32,
    pub fill_opacity: f64,
    /// HTML popup body.
    pub popup: String,
}

/// Everything the JS bridge needs to draw the map.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
    /// Group markers with Leaflet.markercluster.
    pub cluster: bool,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build the map for a set of selected readings.
///
/// Centers on the mean position of the readings, or on `fallback_center`
/// when there are none.
pub fn render_map_view(readings: &[Reading], fallback_center: GeoPoint) -> MapView {
    let markers: Vec<MapMarker> = readings.iter().map(marker_for).collect();
    let center = mean_center(readings.iter().map(|r| GeoPoint {
        latitude: r.latitude,
        longitude: r.longitude,
    }))
    .unwrap_or(fallback_center);

    MapView {
        center,
        zoom: DEFAULT_ZOOM,
        tile_url: BASEMAP_TILES,
        tile_attribution: BASEMAP_ATTRIBUTION,
        cluster: true,
        markers,
    }
}

fn marker_for(reading: &Reading) -> MapMarker {
    MapMarker {
        latitude: reading.latitude,
        longitude: reading.longitude,
        color: reading.category.color(),
        radius: MARKER_RADIUS,
        fill_opacity: MARKER_FILL_OPACITY,
        popup: popup_html(reading),
    }
}

/// `Site: …<br>AQI: …<br>PM2.5: … µg/m³`
pub fn popup_html(reading: &Reading) -> String {
    format!(
        "Site: {}<br>AQI: {}<br>PM2.5: {} µg/m³",
        escape_html(&reading.site_number),
        format_value(reading.aqi),
        format_value(reading.sample_measurement),
    )
}

/// Whole numbers without a decimal point, missing values as `n/a`.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
        Some(v) => format!("{}", v),
        None => "n/a".to_string(),
    }
}

/// Popups are set through Leaflet's `bindPopup`, which writes innerHTML.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
