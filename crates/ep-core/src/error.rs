//! Parameter errors.
//!
//! Sub-crates define their own error enums and wrap `EpError` as one variant
//! where a parameter problem can surface through them.

use thiserror::Error;

/// Why a [`SimParams`](crate::SimParams) was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EpError {
    #[error("invalid {field}: {reason}")]
    InvalidParam { field: &'static str, reason: &'static str },

    #[error("{name} rate {value} outside [0, 1]")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("{buildings} buildings do not fit on a {tiles}-tile grid")]
    GridTooSmall { buildings: usize, tiles: usize },
}

/// Shorthand result type for parameter checks.
pub type EpResult<T> = Result<T, EpError>;
