//! `ep-sim` — population engine and run loop for the epitown simulation.
//!
//! # Run loop
//!
//! ```text
//! each step:
//!   no agent exposed or infectious?  → final hourly update, report, stop
//!   ① clock.advance()
//!   ② hour boundary?  → hourly update (building contacts + SEIRD step),
//!                        report counts, start commutes due this hour
//!   ③ motion tick     → every agent moves, then proximity contacts
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`contacts`] | `CandidateIndex` — route-overlap candidate sets           |
//! | [`engine`]   | `PopulationEngine`, `PopulationConfig`                    |
//! | [`sim`]      | `Sim`, `Step`, `RunSummary`                               |
//! | [`builder`]  | `SimBuilder` — parameters + town → ready `Sim`            |
//! | [`observer`] | `SimObserver`, `NoopObserver`                             |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Builds the candidate index on Rayon's thread pool.        |
//! | `fx-hash`  | Uses FxHash for route waypoint sets.                      |

pub mod builder;
pub mod contacts;
pub mod engine;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use contacts::CandidateIndex;
pub use engine::{PopulationConfig, PopulationEngine};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunSummary, Sim, Step};
