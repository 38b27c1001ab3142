//! The `OutputWriter` trait implemented by backend writers.

use crate::{HourlyRow, OutputResult, RoadRow};

/// A sink for one run's output.
///
/// [`SimOutputObserver`](crate::SimOutputObserver) stores the first error a
/// writer returns; retrieve it with `take_error` after the run.
pub trait OutputWriter {
    /// Write the road layout.  Called once, before the first hour.
    fn write_roads(&mut self, rows: &[RoadRow]) -> OutputResult<()>;

    /// Write one hourly count row.
    fn write_hour(&mut self, row: &HourlyRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
