//! Run parameters.
//!
//! [`SimParams`] is the persisted configuration of one run: what an entry form
//! collects and a run history stores.  The core only consumes it as
//! constructor input; it performs no I/O itself.

use std::fmt;

use crate::building::occupant_radius;
use crate::{EpError, EpResult};

/// Which qualifying leaf a road-augmentation pass connects to.
///
/// Changing the policy changes the generated road topology, so it is a run
/// parameter rather than a fixed behaviour.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PartnerSelection {
    /// The last qualifying leaf in scan order wins.
    #[default]
    LastQualifying,
    /// The closest qualifying leaf wins; ties go to the first in scan order.
    Nearest,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    pub simulation_name: String,

    /// Simulated hours per real second.  `seconds_per_hour = 1 / speed`.
    pub simulation_speed: f64,

    /// Width and height of the square display, in pixels.
    pub display_size: i32,

    pub num_houses: usize,
    pub num_offices: usize,

    /// Side length of one building tile, in pixels.
    pub building_size: i32,

    pub people_per_house: usize,

    /// Augment the spanning tree with extra leaf-to-leaf roads.
    pub additional_roads: bool,

    /// Daily infection probability per contact.
    pub infection_rate: f64,
    /// Incubation period, in days.
    pub incubation_days: f64,
    /// Daily recovery probability.
    pub recovery_rate: f64,
    /// Daily mortality probability.
    pub mortality_rate: f64,

    /// Frame rate of the driving loop.
    pub ticks_per_second: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Leaves closer than this (tile units) are never joined by an extra road.
    pub min_extra_edge_distance: f64,

    pub partner_selection: PartnerSelection,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            simulation_name:         "Simulation".to_owned(),
            simulation_speed:        2.0,
            display_size:            800,
            num_houses:              75,
            num_offices:             25,
            building_size:           50,
            people_per_house:        4,
            additional_roads:        true,
            infection_rate:          0.7,
            incubation_days:         2.0,
            recovery_rate:           0.6,
            mortality_rate:          0.1,
            ticks_per_second:        60,
            seed:                    42,
            min_extra_edge_distance: 3.0,
            partner_selection:       PartnerSelection::LastQualifying,
        }
    }
}

impl SimParams {
    /// Real seconds one simulated hour lasts.
    #[inline]
    pub fn seconds_per_hour(&self) -> f64 {
        1.0 / self.simulation_speed
    }

    /// Number of tiles along each side of the display.
    #[inline]
    pub fn tiles_per_side(&self) -> i32 {
        self.display_size / self.building_size
    }

    pub fn num_people(&self) -> usize {
        self.num_houses * self.people_per_house
    }

    /// Combinations that pass [`validate`](Self::validate) but deserve a
    /// warning before the run starts.
    pub fn warnings(&self) -> Vec<ParamWarning> {
        let mut out = Vec::new();
        if self.recovery_rate == 0.0 && self.mortality_rate == 0.0 {
            out.push(ParamWarning::NeverEnds);
        }
        if self.num_people() >= 1000 {
            out.push(ParamWarning::LargePopulation(self.num_people()));
        }
        let buildings = self.num_houses + self.num_offices;
        if buildings >= 500 {
            out.push(ParamWarning::ManyBuildings(buildings));
        }
        out
    }

    /// Check every parameter, returning the first violation found.
    pub fn validate(&self) -> EpResult<()> {
        if self.simulation_name.chars().count() > 50 {
            return invalid("simulation_name", "at most 50 characters");
        }
        if !(self.simulation_speed > 0.0) {
            return invalid("simulation_speed", "must be positive");
        }
        if self.display_size <= 0 || self.display_size > 2160 {
            return invalid("display_size", "must be in 1..=2160 pixels");
        }
        if self.building_size <= 0 {
            return invalid("building_size", "must be positive");
        }
        if self.num_houses == 0 {
            return invalid("num_houses", "at least one house is required");
        }
        if self.num_offices == 0 {
            return invalid("num_offices", "at least one office is required");
        }
        let tiles = (self.tiles_per_side().max(0) as usize).pow(2);
        let buildings = self.num_houses + self.num_offices;
        if buildings > tiles {
            return Err(EpError::GridTooSmall { buildings, tiles });
        }
        if self.people_per_house == 0 {
            return invalid("people_per_house", "must be positive");
        }
        let per_office = self.num_people() / self.num_offices;
        if occupant_radius(self.building_size, self.people_per_house) < 1
            || occupant_radius(self.building_size, per_office) < 1
        {
            return invalid("building_size", "too small to display its occupants");
        }
        for (name, value) in [
            ("infection", self.infection_rate),
            ("recovery", self.recovery_rate),
            ("mortality", self.mortality_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EpError::RateOutOfRange { name, value });
            }
        }
        if !(self.incubation_days >= 0.0) {
            return invalid("incubation_days", "must not be negative");
        }
        if self.ticks_per_second == 0 {
            return invalid("ticks_per_second", "must be positive");
        }
        Ok(())
    }
}

/// A legal but questionable parameter combination.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParamWarning {
    /// Infectious agents never leave that state, so the run only ends on
    /// its hour budget.
    NeverEnds,
    LargePopulation(usize),
    ManyBuildings(usize),
}

impl fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeverEnds => {
                write!(f, "recovery and mortality rates are both zero; the epidemic never ends")
            }
            Self::LargePopulation(n) => write!(f, "{n} people may run slowly"),
            Self::ManyBuildings(n) => write!(f, "{n} buildings may take a long time to connect"),
        }
    }
}

fn invalid(field: &'static str, reason: &'static str) -> EpResult<()> {
    Err(EpError::InvalidParam { field, reason })
}
