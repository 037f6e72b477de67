//! In-memory SQLite table of hourly PM2.5 AQI readings.
//!
//! The page loads the embedded CSV into a [`Database`] once on mount and
//! keeps the handle in its application state; every date/hour change runs
//! [`Database::select_readings`] against it. The CLI uses the same handle
//! natively.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - Rows are parsed with `aqi_core::reading` and dropped when timestamp or
//!   coordinates are missing
//! - `date` and `hour` are stored as their own indexed columns so the
//!   date/hour selection is an index lookup
//!
//! # Usage
//!
//! ```rust
//! use aqi_core::selection::HourOfDay;
//! use aqi_db::Database;
//! use chrono::NaiveDate;
//!
//! let db = Database::new().unwrap();
//! let summary = db
//!     .load_readings(
//!         "site_number,date_local,time_local,latitude,longitude,sample_measurement,aqi,aqi_category\n\
//!          0004,2017-06-15,14:00,36.78538,-119.77321,8.2,34,Good\n",
//!     )
//!     .unwrap();
//! assert_eq!(summary.loaded, 1);
//!
//! let date = NaiveDate::from_ymd_opt(2017, 6, 15).unwrap();
//! let readings = db.select_readings(date, HourOfDay::new(14).unwrap()).unwrap();
//! assert_eq!(readings.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the loaded readings.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_readings`]
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
