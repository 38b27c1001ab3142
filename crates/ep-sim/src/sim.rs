//! The `Sim` struct and its step loop.

use ep_core::SimClock;
use ep_disease::StatusCounts;
use ep_spatial::RoadNetwork;

use crate::{PopulationEngine, SimObserver};

/// What one call to [`Sim::step`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Step {
    /// A motion tick inside an hour.
    Tick,
    /// A motion tick that also completed a simulated hour.
    Hour { day: u32, hour: u32 },
    /// The epidemic had died out; the final update ran and the run is over.
    Finished,
}

/// Outcome of [`Sim::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub day:           u32,
    pub hour:          u32,
    /// Simulated hours completed.
    pub hours:         u64,
    /// `true` if the run ended because no agent was exposed or infectious,
    /// `false` if the hour budget ran out first.
    pub epidemic_over: bool,
    pub final_counts:  StatusCounts,
}

/// The main simulation runner.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Converts motion ticks into (day, hour).
    pub clock: SimClock,

    /// Agents, candidate index and disease model.
    pub engine: PopulationEngine,

    /// Road layout; read-only after construction.
    pub network: RoadNetwork,

    finished: bool,
}

impl Sim {
    pub fn new(clock: SimClock, engine: PopulationEngine, network: RoadNetwork) -> Self {
        Self { clock, engine, network, finished: false }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by one motion tick.
    ///
    /// Once no agent is exposed or infectious, the next call runs one last
    /// hourly update, reports it and ends the run; further calls do nothing.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Step {
        if self.finished {
            return Step::Finished;
        }
        if !self.engine.has_active_infections() {
            self.engine.hourly_update();
            let counts = self.engine.status_counts();
            observer.on_hour(self.clock.day, self.clock.hour, &counts);
            self.finished = true;
            log::info!("no active infections at {}: {counts}", self.clock);
            return Step::Finished;
        }

        let hour_ended = self.clock.advance();
        if hour_ended {
            self.engine.hourly_update();
            let counts = self.engine.status_counts();
            observer.on_hour(self.clock.day, self.clock.hour, &counts);
            self.engine.commute(self.clock.hour);
        }
        self.engine.tick();

        if hour_ended {
            Step::Hour { day: self.clock.day, hour: self.clock.hour }
        } else {
            Step::Tick
        }
    }

    /// Step until the epidemic is over or `max_hours` simulated hours have
    /// passed.
    pub fn run<O: SimObserver>(&mut self, max_hours: u64, observer: &mut O) -> RunSummary {
        observer.on_start(&self.network, &self.engine.status_counts());
        log::info!(
            "run start: {} agents, {} ticks per hour",
            self.engine.len(),
            self.clock.ticks_per_hour,
        );

        while !self.finished && self.clock.elapsed_hours < max_hours {
            self.step(observer);
        }

        let summary = RunSummary {
            day:           self.clock.day,
            hour:          self.clock.hour,
            hours:         self.clock.elapsed_hours,
            epidemic_over: self.finished,
            final_counts:  self.engine.status_counts(),
        };
        log::info!(
            "run end after {} hours ({}): {}",
            summary.hours,
            if summary.epidemic_over { "epidemic over" } else { "hour budget reached" },
            summary.final_counts,
        );
        observer.on_sim_end(&summary);
        summary
    }
}
