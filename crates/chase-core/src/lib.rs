//! `chase-core` — foundational types for the `chase` pursuit-evasion
//! simulator.
//!
//! This crate is a dependency of every other `chase-*` crate.  It
//! intentionally has no `chase-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`point`]    | `Point2`, Euclidean distance                      |
//! | [`agent`]    | `KinematicAgent`, `Role`                          |
//! | [`config`]   | `ScenarioConfig`, `BatchConfig`, spawn constants  |
//! | [`outcome`]  | `Outcome`, `TrialRecord`                          |
//! | [`rng`]      | `TrialRng` (per-trial deterministic RNG)          |
//! | [`error`]    | `ChaseError`, `ChaseResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod agent;
pub mod config;
pub mod error;
pub mod outcome;
pub mod point;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{KinematicAgent, Role};
pub use config::{BatchConfig, ScenarioConfig};
pub use error::{ChaseError, ChaseResult};
pub use outcome::{Outcome, TrialRecord};
pub use point::Point2;
pub use rng::TrialRng;
