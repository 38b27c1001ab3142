//! `ep-agent` — the town and the people who commute through it.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`town`]     | `Building` (kind-tagged record), `Town`, `interior_positions` |
//! | [`route`]    | `Route` — pixel waypoints of one commute leg                  |
//! | [`agent`]    | `Agent` — motion along a route + SEIRD transitions            |
//! | [`builder`]  | `PopulationBuilder` — homes, offices, routes, index case      |
//! | [`error`]    | `PopulationError`, `PopulationResult<T>`                      |
//!
//! # Per-agent lifecycle
//!
//! An agent is created once, at population initialisation, and never
//! removed.  Every motion tick moves it towards the next waypoint of its
//! current route; every simulated hour advances its epidemic state.  A
//! deceased agent stays where it died.

pub mod agent;
pub mod builder;
pub mod error;
pub mod route;
pub mod town;


pub use agent::{Agent, Commute, Leg};
pub use builder::{PopulationBuilder, commute_speed, departure_hour};
pub use error::{PopulationError, PopulationResult};
pub use route::Route;
pub use town::{Building, Town, interior_positions};
