//! Scenario and batch configuration.
//!
//! Configuration is an explicit immutable value threaded through the batch
//! runner — there is no process-wide mutable state.  Validation is fail-fast:
//! [`BatchConfig::validate`] runs before any trial and a bad value aborts
//! the whole batch with a [`ChaseError::Config`].

use crate::{ChaseError, ChaseResult, Point2};

// ── Spawn region ─────────────────────────────────────────────────────────────

/// The evader spawns uniformly inside `[0, EVADER_SPAWN_MAX]²`.
pub const EVADER_SPAWN_MAX: f64 = 10.0;

/// The pursuer spawns at the evader's start plus independent uniform offsets
/// in `[-PURSUER_SPAWN_SPREAD, PURSUER_SPAWN_SPREAD]` on each axis.
pub const PURSUER_SPAWN_SPREAD: f64 = 5.0;

// ── ScenarioConfig ───────────────────────────────────────────────────────────

/// Parameters shared by every trial in a batch.
///
/// `field_size` is only used to derive the step cap — positions are never
/// clamped to the field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Side length of the (square) field, in distance units.
    pub field_size: f64,

    /// The point the evader runs for.
    pub safe_zone: Point2,

    pub pursuer_speed: f64,
    pub evader_speed: f64,

    /// The pursuer wins when within this distance of the evader.  The evader
    /// wins when within *half* this distance of the safe zone.
    pub capture_radius: f64,

    /// Simulated seconds advanced per step.
    pub step_duration: f64,
}

impl ScenarioConfig {
    /// Upper bound on steps per trial, after which the trial is a Timeout.
    ///
    /// `floor(2 * field_size / evader_speed / step_duration)` — the time to
    /// cross the field twice at evader speed.  A heuristic safety valve, not
    /// a tight bound: it deliberately ignores pursuer speed and the actual
    /// starting separation.  Changing the formula would silently shift
    /// Timeout rates, so it stays as-is.
    #[inline]
    pub fn step_cap(&self) -> u64 {
        (2.0 * self.field_size / self.evader_speed / self.step_duration) as u64
    }

    /// Check every field for finiteness and positivity.
    pub fn validate(&self) -> ChaseResult<()> {
        fn positive(name: &str, v: f64) -> ChaseResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(ChaseError::Config(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
            Ok(())
        }

        if !self.field_size.is_finite() || self.field_size < 0.0 {
            return Err(ChaseError::Config(format!(
                "field_size must be finite and >= 0, got {}",
                self.field_size
            )));
        }
        if !self.safe_zone.is_finite() {
            return Err(ChaseError::Config(format!(
                "safe_zone must be finite, got {}",
                self.safe_zone
            )));
        }
        positive("pursuer_speed", self.pursuer_speed)?;
        positive("evader_speed", self.evader_speed)?;
        positive("capture_radius", self.capture_radius)?;
        positive("step_duration", self.step_duration)?;
        Ok(())
    }
}

// ── BatchConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration for one batch run.
///
/// Typically built by the application (CLI flags, prompts, a config file)
/// and passed to `run_batch`.  The same `seed` always produces identical
/// results.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    pub scenario: ScenarioConfig,

    /// Number of independent trials to run.  Must be >= 1.
    pub num_trials: u32,

    /// Master RNG seed.  Each trial derives its own stream from this.
    pub seed: u64,
}

impl BatchConfig {
    /// Fail fast on any invalid parameter; nothing runs on an `Err`.
    pub fn validate(&self) -> ChaseResult<()> {
        self.scenario.validate()?;
        if self.num_trials < 1 {
            return Err(ChaseError::Config(
                "num_trials must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
