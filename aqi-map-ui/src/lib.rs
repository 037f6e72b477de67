//! Shared Dioxus components and Leaflet bridge for the AQI map page.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet marker map via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (sliders, count line, map container, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
