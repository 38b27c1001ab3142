use ep_core::TileCoord;
use ep_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("tile {0} already holds a building")]
    TileOccupied(TileCoord),

    #[error("the town needs at least one house and one office")]
    MissingBuildings,

    #[error("people per house must be positive")]
    EmptyHouses,

    #[error("no road route from home {home} to office {office}")]
    NoRoute { home: TileCoord, office: TileCoord },

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
