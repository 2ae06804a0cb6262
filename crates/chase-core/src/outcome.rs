//! Terminal outcomes and the per-trial result record.

use std::fmt;

// ── Outcome ──────────────────────────────────────────────────────────────────

/// How a trial ended.
///
/// Timeout is a valid terminal outcome, not an error: it means neither side
/// resolved the chase within the step budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The pursuer closed to within the capture radius.
    Caught,
    /// The evader reached the safe zone (within half the capture radius).
    Safe,
    /// The step cap elapsed with neither condition met.
    Timeout,
}

impl Outcome {
    /// The label used in reports and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Caught => "Caught",
            Outcome::Safe => "Safe",
            Outcome::Timeout => "Timeout",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TrialRecord ──────────────────────────────────────────────────────────────

/// The immutable result of one completed trial.
///
/// Created exactly once when a trial reaches a terminal state; values are
/// already rounded for reporting (2 decimal places) at that point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialRecord {
    /// 1-based sequential attempt number within the batch.
    pub attempt_id: u32,

    pub outcome: Outcome,

    /// Simulated seconds elapsed: completed steps × step duration.
    pub time_s: f64,

    /// Evader's final position.
    pub evader_x: f64,
    pub evader_y: f64,
}

impl TrialRecord {
    /// Build a record, rounding time and position to 2 decimal places.
    pub fn new(attempt_id: u32, outcome: Outcome, time_s: f64, evader_x: f64, evader_y: f64) -> Self {
        Self {
            attempt_id,
            outcome,
            time_s: round2(time_s),
            evader_x: round2(evader_x),
            evader_y: round2(evader_y),
        }
    }
}

impl fmt::Display for TrialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Attempt {}: {} in {}s (Final Pos: ({}, {}))",
            self.attempt_id, self.outcome, self.time_s, self.evader_x, self.evader_y
        )
    }
}

/// Round to 2 decimal places (half-away-from-zero, like `f64::round`).
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
