//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ep_disease::StatusCounts;
use ep_sim::{RunSummary, SimObserver};
use ep_spatial::RoadNetwork;

use crate::row::{HourlyRow, RoadRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the road layout and the hourly SEIRD counts
/// to any [`OutputWriter`].
///
/// Observer methods cannot fail, so writer errors are stored; check with
/// [`take_error`][Self::take_error] after `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// The first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Hourly rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                log::error!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_start(&mut self, network: &RoadNetwork, _counts: &StatusCounts) {
        let rows: Vec<RoadRow> = network.roads().iter().map(RoadRow::from).collect();
        let result = self.writer.write_roads(&rows);
        self.store_err(result);
    }

    fn on_hour(&mut self, day: u32, hour: u32, counts: &StatusCounts) {
        let result = self.writer.write_hour(&HourlyRow::new(day, hour, counts));
        self.rows += 1;
        self.store_err(result);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        log::debug!("{} hourly rows written over {} hours", self.rows, summary.hours);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
