//! Fresno PM2.5 AQI - Time Slider Map
//!
//! Shows every monitoring site's hourly PM2.5 reading for a chosen date and
//! hour as colored circle markers on a dark basemap. Marker color follows
//! the reading's AQI category; markers cluster when zoomed out and open a
//! popup with site, AQI and PM2.5.
//!
//! Data flow:
//! 1. `build.rs` gzips `fresno_pm25_hourly_with_aqi_and_category.csv` into `OUT_DIR`.
//! 2. `include_bytes!` embeds the compressed CSV into the WASM binary.
//! 3. On mount the CSV is inflated and loaded into an in-memory SQLite
//!    database once; the handle lives in `AppState` for the page's lifetime.
//! 4. Whenever the date or hour slider changes, the app runs
//!    `select_readings()` and redraws the Leaflet map.

use aqi_core::compression::gunzip_to_string;
use aqi_core::map_view::{render_map_view, GeoPoint, FRESNO_CENTER};
use aqi_core::selection::DateBounds;
use aqi_db::models::LoadSummary;
use aqi_db::Database;
use aqi_map_ui::components::{
    CategoryLegend, DateSlider, ErrorDisplay, HourSlider, LoadingSpinner, MapContainer, MapHeader,
    MatchCount,
};
use aqi_map_ui::js_bridge;
use aqi_map_ui::state::{AppState, ViewPhase};
use dioxus::prelude::*;

/// Hourly PM2.5 readings with AQI and category, gzip-compressed.
const READINGS_CSV_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/readings.csv.gz"));

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "fresno-aqi-map";

const TITLE: &str = "📍 Fresno PM2.5 AQI - Time Slider Map";
const CAPTION: &str = "Explore AQI by hour from 1999 to 2025";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fresno-aqi-root"))
        .launch(App);
}

/// Everything the page derives from the embedded file at startup.
struct LoadedDataset {
    db: Database,
    summary: LoadSummary,
    bounds: DateBounds,
    centroid: GeoPoint,
}

/// Inflate and load the embedded readings. Any failure is fatal for the page.
fn load_dataset(compressed: &[u8]) -> anyhow::Result<LoadedDataset> {
    let csv = gunzip_to_string(compressed)?;
    let db = Database::new()?;
    let summary = db.load_readings(&csv)?;
    let bounds = db.query_date_range()?;
    let centroid = db.query_centroid()?.unwrap_or(FRESNO_CENTER);
    Ok(LoadedDataset {
        db,
        summary,
        bounds,
        centroid,
    })
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the dataset once on mount ───
    use_effect(move || match load_dataset(READINGS_CSV_GZ) {
        Ok(dataset) => {
            log::info!(
                "[AQI] dataset ready: {} readings ({} dropped), {} to {}",
                dataset.summary.loaded,
                dataset.summary.dropped,
                dataset.bounds.min,
                dataset.bounds.max
            );
            state.date_bounds.set(Some(dataset.bounds));
            state.fallback_center.set(dataset.centroid);
            state.select_date(dataset.bounds.default_date());
            state.db.set(Some(dataset.db));
            state.loading.set(false);

            js_bridge::init_map();
        }
        Err(e) => {
            log::error!("[AQI] failed to load readings: {:#}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load readings: {:#}", e)));
            state.loading.set(false);
        }
    });

    // ─── Effect 2: Select and redraw ───
    // Re-runs whenever loading, the selected date or the selected hour change.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let Some(date) = (state.selected_date)() else {
            return;
        };
        let hour = (state.selected_hour)();
        let fallback = (state.fallback_center)();

        let readings = match db.select_readings(date, hour) {
            Ok(readings) => readings,
            Err(e) => {
                log::error!("[AQI] selection failed for {} @ {}:00: {}", date, hour, e);
                js_bridge::destroy_map(MAP_ID);
                state.match_count.set(0);
                state.phase.set(ViewPhase::Idle);
                return;
            }
        };
        state.match_count.set(readings.len());

        let view = render_map_view(&readings, fallback);
        match view.to_json() {
            Ok(view_json) => js_bridge::render_marker_map(MAP_ID, &view_json),
            Err(e) => log::error!("[AQI] failed to serialize map view: {}", e),
        }
        state.phase.set(ViewPhase::Idle);
    });

    let redrawing = (state.phase)() == ViewPhase::Recompute;

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            MapHeader {
                title: TITLE.to_string(),
                caption: CAPTION.to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    hint: "The readings file fixtures/fresno_pm25_hourly_with_aqi_and_category.csv is required at build time.".to_string(),
                }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; align-items: end;",
                    DateSlider {}
                    HourSlider {}
                }

                MatchCount {}

                MapContainer {
                    id: MAP_ID.to_string(),
                    loading: redrawing,
                    height: 600,
                }

                CategoryLegend {}

                div {
                    style: "margin-top: 12px; padding: 8px 12px; background: #F5F5F5; border-radius: 4px; font-size: 12px; color: #616161; border: 1px solid #E0E0E0;",
                    "Nearby monitors are grouped into clusters when zoomed out. Click a marker for its site number, AQI and PM2.5 concentration."
                }
            }
        }
    }
}
