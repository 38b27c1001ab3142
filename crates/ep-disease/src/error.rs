use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DiseaseError {
    #[error("{name} probability {value} outside [0, 1]")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("incubation time {0} must not be negative")]
    NegativeIncubation(f64),

    #[error("seconds per hour {0} must be positive")]
    NonPositiveTimeScale(f64),
}

pub type DiseaseResult<T> = Result<T, DiseaseError>;
