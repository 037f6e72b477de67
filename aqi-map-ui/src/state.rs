//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The only user-controlled values are `selected_date` and `selected_hour`;
//! everything else is derived from the loaded table or from the last render.

use aqi_core::map_view::{GeoPoint, FRESNO_CENTER};
use aqi_core::selection::{DateBounds, HourOfDay};
use aqi_db::Database;
use chrono::NaiveDate;
use dioxus::prelude::*;

/// Where the page is in its select → render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// The map shows the current selection.
    Idle,
    /// A selector changed and the map has not been redrawn yet.
    Recompute,
}

/// Shared application state for the AQI map page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded readings (None until loaded, and forever None if the load failed)
    pub db: Signal<Option<Database>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if the load failed
    pub error_msg: Signal<Option<String>>,
    /// First and last dates present in the data
    pub date_bounds: Signal<Option<DateBounds>>,
    /// Map center used when a selection matches nothing
    pub fallback_center: Signal<GeoPoint>,
    /// Currently selected calendar date
    pub selected_date: Signal<Option<NaiveDate>>,
    /// Currently selected hour of day
    pub selected_hour: Signal<HourOfDay>,
    /// Number of readings matching the current selection
    pub match_count: Signal<usize>,
    /// Whether the map is up to date with the selection
    pub phase: Signal<ViewPhase>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            date_bounds: Signal::new(None),
            fallback_center: Signal::new(FRESNO_CENTER),
            selected_date: Signal::new(None),
            selected_hour: Signal::new(HourOfDay::default()),
            match_count: Signal::new(0),
            phase: Signal::new(ViewPhase::Idle),
        }
    }

    /// Change the selected date and schedule a redraw.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date.set(Some(date));
        self.phase.set(ViewPhase::Recompute);
    }

    /// Change the selected hour and schedule a redraw.
    pub fn select_hour(&mut self, hour: HourOfDay) {
        self.selected_hour.set(hour);
        self.phase.set(ViewPhase::Recompute);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
