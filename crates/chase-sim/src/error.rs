//! Error types for chase-sim.

use chase_core::ChaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] ChaseError),
}

pub type SimResult<T> = Result<T, SimError>;
