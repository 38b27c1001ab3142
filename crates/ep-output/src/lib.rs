//! `ep-output` — run output writers for the epitown simulation.
//!
//! | Backend | Files created                        |
//! |---------|--------------------------------------|
//! | CSV     | `hourly_counts.csv`, `roads.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ep_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ep_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(max_hours, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     log::error!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{HourlyRow, RoadRow};
pub use writer::OutputWriter;
