//! Fluent builder for constructing a [`Sim`].

use ep_agent::Town;
use ep_core::{SimClock, SimParams, SimRng};
use ep_disease::DiseaseModel;
use ep_spatial::{DijkstraRouter, RoadNetworkBuilder, Router};

use crate::{PopulationConfig, PopulationEngine, Sim, SimResult};

/// Seed offset of the population stream derived from the master RNG.
const POPULATION_STREAM: u64 = 1;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimParams`] — validated in [`build`](Self::build)
/// - [`Town`] — placed buildings; their tiles become the road network nodes
///
/// # Optional inputs
///
/// | Method        | Default            |
/// |---------------|--------------------|
/// | `.router(r)`  | [`DijkstraRouter`] |
/// | `.rng(r)`     | `SimRng::new(params.seed)` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params, town).build()?;
/// sim.run(24 * 60, &mut NoopObserver);
/// ```
pub struct SimBuilder<'r> {
    params: SimParams,
    town:   Town,
    router: &'r dyn Router,
    rng:    Option<SimRng>,
}

impl<'r> SimBuilder<'r> {
    pub fn new(params: SimParams, town: Town) -> Self {
        Self { params, town, router: &DijkstraRouter, rng: None }
    }

    pub fn router(mut self, router: &'r dyn Router) -> Self {
        self.router = router;
        self
    }

    /// Master RNG; the population stream is derived from it.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate parameters, build the road network and the population, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let params = self.params;
        params.validate()?;

        let network = RoadNetworkBuilder::new()
            .buildings(self.town.locations())
            .augmentation(params.additional_roads)
            .min_extra_edge_distance(params.min_extra_edge_distance)
            .partner_selection(params.partner_selection)
            .build();

        let model = DiseaseModel::from_params(&params)?;
        let mut master = self.rng.unwrap_or_else(|| SimRng::new(params.seed));
        let engine = PopulationEngine::initialize_with_router(
            self.town,
            &network,
            self.router,
            model,
            PopulationConfig::from_params(&params),
            master.child(POPULATION_STREAM),
        )?;
        let clock = SimClock::new(params.seconds_per_hour(), params.ticks_per_second);

        log::info!(
            "simulation '{}' ready: {} agents, {} roads",
            params.simulation_name,
            engine.len(),
            network.edge_count(),
        );
        Ok(Sim::new(clock, engine, network))
    }
}
