//! Interactive explorer for US bikeshare trip logs.
//!
//! Prompts for a city and optional month/day filters, loads the matching
//! trips with polars, and prints popular times, stations, trip durations
//! and user demographics, with an optional raw-row pager.

pub mod collector;
pub mod config;
pub mod console;
pub mod error;
pub mod filters;
pub mod loader;
pub mod pager;
pub mod report;
pub mod schema;
pub mod session;
pub mod stats;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use console::Console;
pub use error::{BikeshareError, Result};
pub use filters::{City, DayFilter, FilterCriteria, MonthFilter};
pub use loader::{load_data, TripTable};
pub use session::run;
