//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `ChaseError`
//! into them via `From` impls or wrap it as one variant.

use thiserror::Error;

/// The top-level error type for `chase-core` and a common base for the
/// other chase crates.
#[derive(Debug, Error)]
pub enum ChaseError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `chase-*` crates.
pub type ChaseResult<T> = Result<T, ChaseError>;
