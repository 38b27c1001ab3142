//! Spatial-subsystem error type.

use thiserror::Error;

use ep_core::TileCoord;

/// Errors produced by `ep-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: TileCoord, to: TileCoord },

    #[error("node {0} not found in network")]
    NodeNotFound(TileCoord),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
