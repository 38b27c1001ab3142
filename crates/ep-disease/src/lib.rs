//! `ep-disease` — the SEIRD disease model.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`state`]  | `EpiState` — S, E, I, R, D                            |
//! | [`model`]  | `DiseaseModel`, `DailyRates` — per-hour Bernoulli trials |
//! | [`counts`] | `StatusCounts` — agents per state                     |
//! | [`error`]  | `DiseaseError`, `DiseaseResult<T>`                    |
//!
//! # Sampling resolution
//!
//! Every trial draws a uniform integer in `[0, 1000)` and succeeds when the
//! draw is below `p × 1000`.  Probabilities therefore resolve to the nearest
//! thousandth (rounded up), so `p = 1.0` always succeeds and `p = 0.0` never
//! does.

pub mod counts;
pub mod error;
pub mod model;
pub mod state;

#[cfg(test)]
mod tests;

pub use counts::StatusCounts;
pub use error::{DiseaseError, DiseaseResult};
pub use model::{DailyRates, DiseaseModel};
pub use state::EpiState;
