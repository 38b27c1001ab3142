//! Simulation time model.
//!
//! # Design
//!
//! The canonical time unit is the motion [`Tick`].  A run is configured with
//! `seconds_per_hour` (real seconds one simulated hour lasts) and
//! `ticks_per_second` (frame rate of the driving loop); together they fix how
//! many ticks make up one simulated hour:
//!
//!   ticks_per_hour = max(1, round(seconds_per_hour × ticks_per_second))
//!
//! Counting whole ticks instead of accumulating floating-point seconds means
//! the hour boundary never drifts by a frame.
//!
//! Hours run 1..=24 within a day; the clock starts at hour 0 of day 1, before
//! the first hour boundary.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute motion-tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts motion ticks into simulated (day, hour) pairs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Motion ticks per simulated hour (always ≥ 1).
    pub ticks_per_hour: u64,
    /// The current tick — advanced by [`SimClock::advance`].
    pub current_tick: Tick,
    /// Day number, starting at 1.
    pub day: u32,
    /// Hour within the day, 1..=24 (0 before the first boundary).
    pub hour: u32,
    /// Total hour boundaries crossed since tick 0.
    pub elapsed_hours: u64,
    ticks_into_hour: u64,
}

impl SimClock {
    pub fn new(seconds_per_hour: f64, ticks_per_second: u32) -> Self {
        let ticks_per_hour = (seconds_per_hour * f64::from(ticks_per_second)).round().max(1.0) as u64;
        Self::with_ticks_per_hour(ticks_per_hour)
    }

    pub fn with_ticks_per_hour(ticks_per_hour: u64) -> Self {
        Self {
            ticks_per_hour: ticks_per_hour.max(1),
            current_tick:   Tick::ZERO,
            day:            1,
            hour:           0,
            elapsed_hours:  0,
            ticks_into_hour: 0,
        }
    }

    /// Advance the clock by one tick.
    ///
    /// Returns `true` when this tick completes a simulated hour; `hour` and
    /// `day` are already updated (hour 24 rolls over to hour 1 of the next day).
    pub fn advance(&mut self) -> bool {
        self.current_tick = self.current_tick.offset(1);
        self.ticks_into_hour += 1;
        if self.ticks_into_hour < self.ticks_per_hour {
            return false;
        }
        self.ticks_into_hour = 0;
        self.elapsed_hours += 1;
        self.hour += 1;
        if self.hour > 24 {
            self.hour = 1;
            self.day += 1;
        }
        true
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day: {}, Hour: {}", self.day, self.hour)
    }
}
