//! Population initialisation.
//!
//! # Procedure
//!
//! 1. Agent *i* lives in house *i / people_per_house* (houses in placement
//!    order) and takes slot *i mod people_per_house* inside it.
//! 2. Offices receive an even share of the population: ⌊n / offices⌋ each,
//!    the first *n mod offices* one extra.  The per-agent office list is then
//!    shuffled.
//! 3. Each agent's commute is the shortest road path from its home tile to
//!    its office tile, wrapped in the two interior slots.
//! 4. One agent, drawn uniformly, starts infectious; the rest susceptible.

use std::collections::HashMap;

use ep_core::{AgentId, BuildingId, SimRng, occupant_radius};
use ep_disease::EpiState;
use ep_spatial::{DijkstraRouter, RoadNetwork, Router, SpatialError};

use crate::{Agent, Commute, PopulationError, PopulationResult, Route, Town, interior_positions};

/// Pixels per motion tick: `max(1, ⌊display·(60/tps) / (2·size·seconds_per_hour)⌋)`.
///
/// At 60 ticks per second an agent crosses half the display in about one
/// simulated hour.
pub fn commute_speed(display_size: i32, building_size: i32, seconds_per_hour: f64, ticks_per_second: u32) -> f64 {
    let numerator = f64::from(display_size) * (60.0 / f64::from(ticks_per_second));
    let denominator = 2.0 * f64::from(building_size) * seconds_per_hour;
    (numerator / denominator).floor().max(1.0)
}

/// Hour to set off so as to arrive by 9: `max(1, 9 − ⌈travel hours⌉)`.
///
/// Travel time is the whole number of ticks needed to cover `route_length`
/// pixels at `speed`, converted to simulated hours.
pub fn departure_hour(route_length: f64, speed: f64, seconds_per_hour: f64, ticks_per_second: u32) -> u32 {
    let ticks = (route_length / speed).ceil();
    let hours = ticks / f64::from(ticks_per_second) / seconds_per_hour;
    (9 - hours.ceil() as i64).max(1) as u32
}

/// Builds every [`Agent`] and registers it with its home and office.
pub struct PopulationBuilder<'a> {
    town:             &'a mut Town,
    network:          &'a RoadNetwork,
    router:           &'a dyn Router,
    people_per_house: usize,
    display_size:     i32,
    seconds_per_hour: f64,
    ticks_per_second: u32,
    incubation_secs:  f64,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(town: &'a mut Town, network: &'a RoadNetwork) -> Self {
        Self {
            town,
            network,
            router: &DijkstraRouter,
            people_per_house: 4,
            display_size: 800,
            seconds_per_hour: 1.0,
            ticks_per_second: 60,
            incubation_secs: 0.0,
        }
    }

    pub fn router(mut self, router: &'a dyn Router) -> Self {
        self.router = router;
        self
    }

    pub fn people_per_house(mut self, n: usize) -> Self {
        self.people_per_house = n;
        self
    }

    pub fn display_size(mut self, pixels: i32) -> Self {
        self.display_size = pixels;
        self
    }

    pub fn time_scale(mut self, seconds_per_hour: f64, ticks_per_second: u32) -> Self {
        self.seconds_per_hour = seconds_per_hour;
        self.ticks_per_second = ticks_per_second;
        self
    }

    /// Incubation period each agent carries, in real seconds.
    pub fn incubation_secs(mut self, secs: f64) -> Self {
        self.incubation_secs = secs;
        self
    }

    pub fn build(self, rng: &mut SimRng) -> PopulationResult<Vec<Agent>> {
        let houses: Vec<BuildingId> = self.town.houses().map(|b| b.id).collect();
        let offices: Vec<BuildingId> = self.town.offices().map(|b| b.id).collect();
        if houses.is_empty() || offices.is_empty() {
            return Err(PopulationError::MissingBuildings);
        }
        if self.people_per_house == 0 {
            return Err(PopulationError::EmptyHouses);
        }

        let size = self.town.building_size();
        let pph = self.people_per_house;
        let n = houses.len() * pph;
        let index_case = rng.gen_range(0..n);

        let mut assignment = office_assignment(n, &offices);
        rng.shuffle(&mut assignment);
        let mut workforce: HashMap<BuildingId, usize> = HashMap::with_capacity(offices.len());
        for &office in &assignment {
            *workforce.entry(office).or_default() += 1;
        }

        let speed = commute_speed(self.display_size, size, self.seconds_per_hour, self.ticks_per_second);
        let home_radius = occupant_radius(size, pph);

        let mut agents = Vec::with_capacity(n);
        for (i, &office_id) in assignment.iter().enumerate() {
            let id = AgentId(i as u32);
            let home_id = houses[i / pph];
            let home = self.town.get(home_id).location;
            let office = self.town.get(office_id).location;
            let staff = workforce.get(&office_id).copied().unwrap_or(0);

            let path = match self.network.route(self.router, home, office) {
                Ok(path) => path,
                Err(SpatialError::NoRoute { .. }) => return Err(PopulationError::NoRoute { home, office }),
                Err(e) => return Err(e.into()),
            };

            let home_slots = interior_positions(home, size, pph);
            let office_slots = interior_positions(office, size, staff);
            let desk = self.town.get(office_id).occupants().len();
            let home_position = home_slots[i % pph];
            let office_position = office_slots[desk];

            self.town.get_mut(home_id).add_occupant(id);
            self.town.get_mut(office_id).add_occupant(id);

            let to_office = Route::commute(home_position, &path, office_position, size);
            let leave_home = departure_hour(
                to_office.pixel_length(),
                speed,
                self.seconds_per_hour,
                self.ticks_per_second,
            );
            let state = if i == index_case { EpiState::Infectious } else { EpiState::Susceptible };

            let commute = Commute {
                home,
                office,
                home_position,
                office_position,
                home_radius,
                office_radius: occupant_radius(size, staff),
                to_office,
                speed,
                leave_home,
            };
            agents.push(Agent::new(id, commute, state, self.incubation_secs));
        }

        log::info!(
            "population: {n} agents in {} houses, {} offices; index case {}",
            houses.len(),
            offices.len(),
            AgentId(index_case as u32),
        );
        Ok(agents)
    }
}

/// Office per agent, before shuffling: the first `n mod k` offices take one
/// extra worker.
fn office_assignment(n: usize, offices: &[BuildingId]) -> Vec<BuildingId> {
    let base = n / offices.len();
    let extra = n % offices.len();
    offices
        .iter()
        .enumerate()
        .flat_map(|(k, &office)| {
            let staff = base + usize::from(k < extra);
            std::iter::repeat_n(office, staff)
        })
        .collect()
}
