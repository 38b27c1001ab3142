//! `ep-core` — foundational types for the `epitown` epidemic simulation.
//!
//! This crate is a dependency of every other `ep-*` crate.  It intentionally
//! has no `ep-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BuildingId`                               |
//! | [`geo`]         | `TileCoord` (road-graph node), `PixelPos`             |
//! | [`building`]    | `BuildingKind`, `Rgb`                                 |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimParams`, `PartnerSelection`, `ParamWarning`       |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `EpError`, `EpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod building;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::{BuildingKind, Rgb, grid_divisions, occupant_radius};
pub use config::{ParamWarning, PartnerSelection, SimParams};
pub use error::{EpError, EpResult};
pub use geo::{PixelPos, TileCoord};
pub use ids::{AgentId, BuildingId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
