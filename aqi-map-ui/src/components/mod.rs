//! Reusable Dioxus RSX components for the AQI map page.

mod category_legend;
mod date_slider;
mod error_display;
mod hour_slider;
mod loading_spinner;
mod map_container;
mod map_header;
mod match_count;

pub use category_legend::CategoryLegend;
pub use date_slider::DateSlider;
pub use error_display::ErrorDisplay;
pub use hour_slider::HourSlider;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_header::MapHeader;
pub use match_count::MatchCount;
