//! The population engine: motion ticks, contact detection and hourly
//! epidemic updates over the whole roster.

use ep_agent::{Agent, PopulationBuilder, Town};
use ep_core::{AgentId, SimParams, SimRng};
use ep_disease::{DiseaseModel, EpiState, StatusCounts};
use ep_spatial::{DijkstraRouter, RoadNetwork, Router};

use crate::{CandidateIndex, SimResult};

/// Population-level inputs to [`PopulationEngine::initialize`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopulationConfig {
    pub people_per_house: usize,
    pub display_size:     i32,
    pub seconds_per_hour: f64,
    pub ticks_per_second: u32,
}

impl PopulationConfig {
    pub fn from_params(params: &SimParams) -> Self {
        Self {
            people_per_house: params.people_per_house,
            display_size:     params.display_size,
            seconds_per_hour: params.seconds_per_hour(),
            ticks_per_second: params.ticks_per_second,
        }
    }
}

/// Owns every [`Agent`] and the candidate-contact index.
///
/// The roster is indexed by `AgentId`; agents are never removed.
pub struct PopulationEngine {
    agents:     Vec<Agent>,
    town:       Town,
    model:      DiseaseModel,
    candidates: CandidateIndex,
    rng:        SimRng,
}

impl PopulationEngine {
    /// Create the population over `town` with routes on `network`, then
    /// precompute the candidate-contact index.
    pub fn initialize(
        town: Town,
        network: &RoadNetwork,
        model: DiseaseModel,
        config: PopulationConfig,
        rng: SimRng,
    ) -> SimResult<Self> {
        Self::initialize_with_router(town, network, &DijkstraRouter, model, config, rng)
    }

    pub fn initialize_with_router(
        mut town: Town,
        network: &RoadNetwork,
        router: &dyn Router,
        model: DiseaseModel,
        config: PopulationConfig,
        mut rng: SimRng,
    ) -> SimResult<Self> {
        let agents = PopulationBuilder::new(&mut town, network)
            .router(router)
            .people_per_house(config.people_per_house)
            .display_size(config.display_size)
            .time_scale(config.seconds_per_hour, config.ticks_per_second)
            .incubation_secs(model.incubation_secs())
            .build(&mut rng)?;
        Ok(Self::from_agents(agents, town, model, rng))
    }

    /// Wrap an existing roster.  Agent `i` must have `AgentId(i)` and be
    /// registered as an occupant of its home and office in `town`.
    pub fn from_agents(agents: Vec<Agent>, town: Town, model: DiseaseModel, rng: SimRng) -> Self {
        let candidates = CandidateIndex::build(&agents);
        Self { agents, town, model, candidates, rng }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Mutable access for seeding scenarios.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn model(&self) -> &DiseaseModel {
        &self.model
    }

    pub fn candidates(&self) -> &CandidateIndex {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    // ── Per tick ──────────────────────────────────────────────────────────

    /// One motion tick.
    ///
    /// Every agent moves first.  Then each infectious agent tests the
    /// susceptible agents among its candidates: within twice its own radius,
    /// one infection trial each, success meaning S → E.
    ///
    /// Returns the number of new exposures.
    pub fn tick(&mut self) -> usize {
        for agent in &mut self.agents {
            agent.update_position();
        }

        let mut exposed = 0;
        for i in 0..self.agents.len() {
            let source = &self.agents[i];
            if source.state() != EpiState::Infectious {
                continue;
            }
            let position = source.position();
            let reach = 2.0 * f64::from(source.radius());

            for &other in self.candidates.candidates(source.id) {
                let target = &mut self.agents[other.index()];
                if target.state() == EpiState::Susceptible
                    && position.distance(target.position()) <= reach
                    && self.model.infect(&mut self.rng)
                {
                    target.expose();
                    exposed += 1;
                }
            }
        }
        if exposed > 0 {
            log::trace!("{exposed} exposed by proximity");
        }
        exposed
    }

    // ── Per hour ──────────────────────────────────────────────────────────

    /// One simulated hour.
    ///
    /// Each infectious agent standing on its home slot (or office slot)
    /// gives every susceptible occupant of that building one infection
    /// trial.  Then every agent's epidemic state advances by an hour.
    ///
    /// Returns the number of new exposures.
    pub fn hourly_update(&mut self) -> usize {
        let mut exposed = 0;
        for i in 0..self.agents.len() {
            let source = &self.agents[i];
            if source.state() != EpiState::Infectious {
                continue;
            }
            let building = if source.at_home() {
                self.town.at(source.home())
            } else if source.at_office() {
                self.town.at(source.office())
            } else {
                None
            };
            let Some(building) = building else {
                continue;
            };

            for &occupant in building.occupants() {
                let target = &mut self.agents[occupant.index()];
                if target.state() == EpiState::Susceptible && self.model.infect(&mut self.rng) {
                    target.expose();
                    exposed += 1;
                }
            }
        }

        for agent in &mut self.agents {
            agent.update_epidemic_hour(&self.model, &mut self.rng);
        }

        log::debug!("hourly update: {exposed} exposed in buildings; {}", self.status_counts());
        exposed
    }

    /// Start commutes due at `hour`: agents whose departure hour it is head
    /// to the office; otherwise at 17 everyone heads home.
    pub fn commute(&mut self, hour: u32) {
        for agent in &mut self.agents {
            if hour == agent.leave_home() {
                agent.start_move_to_office();
            } else if hour == 17 {
                agent.start_move_to_home();
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` while any agent is exposed or infectious.
    pub fn has_active_infections(&self) -> bool {
        self.agents.iter().any(|a| a.state().is_active())
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.agents.iter().map(Agent::state).collect()
    }
}
