use ep_agent::PopulationError;
use ep_core::EpError;
use ep_disease::DiseaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid parameters: {0}")]
    Params(#[from] EpError),

    #[error("disease model: {0}")]
    Disease(#[from] DiseaseError),

    #[error("population initialisation failed: {0}")]
    Population(#[from] PopulationError),
}

pub type SimResult<T> = Result<T, SimError>;
