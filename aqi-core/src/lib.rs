//! Core types for the Fresno PM2.5 AQI map.
//!
//! - `category`: AQI categories and their display colors
//! - `timestamp`: combining `date_local` + `time_local` into one timestamp
//! - `reading`: the `Reading` record and CSV column layout
//! - `selection`: hour-of-day and date-bound types behind the page selectors
//! - `map_view`: turning selected readings into clustered map markers
//! - `compression`: inflating the gzip-embedded dataset

pub mod category;
pub mod compression;
pub mod map_view;
pub mod reading;
pub mod selection;
pub mod timestamp;
