//! Random town layout.
//!
//! Houses are placed first, then offices, each on a uniformly random empty
//! tile of the `(display / building)²` grid.  Occupied draws are retried.

use ep_agent::{PopulationResult, Town};
use ep_core::{BuildingKind, SimParams, SimRng, TileCoord};

/// Place `params.num_houses` houses and `params.num_offices` offices.
///
/// `params` must already be validated; that guarantees the buildings fit.
pub fn random_town(params: &SimParams, rng: &mut SimRng) -> PopulationResult<Town> {
    let side = params.tiles_per_side();
    let mut town = Town::new(params.building_size);

    for (kind, count) in [
        (BuildingKind::House, params.num_houses),
        (BuildingKind::Office, params.num_offices),
    ] {
        let mut placed = 0;
        while placed < count {
            let tile = TileCoord::new(rng.gen_range(0..side), rng.gen_range(0..side));
            if town.at(tile).is_none() {
                town.add_building(kind, tile)?;
                placed += 1;
            }
        }
    }

    log::debug!("placed {} buildings on a {side}×{side} grid", town.len());
    Ok(town)
}
