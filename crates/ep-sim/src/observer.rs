//! Simulation observer trait for progress reporting and data collection.

use ep_disease::StatusCounts;
use ep_spatial::RoadNetwork;

use crate::RunSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — hourly printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_hour(&mut self, day: u32, hour: u32, counts: &StatusCounts) {
///         println!("day {day} hour {hour}: {counts}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick with the road layout and the
    /// starting counts (day 1, hour 0).
    fn on_start(&mut self, _network: &RoadNetwork, _counts: &StatusCounts) {}

    /// Called after every hourly update, and once more for the final update
    /// when the epidemic has died out.
    fn on_hour(&mut self, _day: u32, _hour: u32, _counts: &StatusCounts) {}

    /// Called once when the run stops.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
