//! Batch orchestration: run N independent trials and aggregate.

use chase_core::{BatchConfig, Outcome, TrialRecord, TrialRng};

use crate::observer::BatchObserver;
use crate::trial::Trial;
use crate::SimResult;

// ── BatchResult ──────────────────────────────────────────────────────────────

/// The records of one completed batch, in attempt-id order.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchResult {
    pub records: Vec<TrialRecord>,
}

impl BatchResult {
    /// Reduce the record stream to the headline aggregates.
    pub fn summary(&self) -> BatchSummary {
        let mut caught = 0u32;
        let mut safe = 0u32;
        let mut timeout = 0u32;
        let mut safe_time_total = 0.0f64;

        for r in &self.records {
            match r.outcome {
                Outcome::Caught => caught += 1,
                Outcome::Safe => {
                    safe += 1;
                    safe_time_total += r.time_s;
                }
                Outcome::Timeout => timeout += 1,
            }
        }

        BatchSummary {
            trials: self.records.len() as u32,
            caught,
            safe,
            timeout,
            avg_safe_time_s: if safe > 0 {
                Some(safe_time_total / safe as f64)
            } else {
                None
            },
        }
    }
}

// ── BatchSummary ─────────────────────────────────────────────────────────────

/// Aggregate statistics over one batch.  `caught + safe + timeout == trials`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchSummary {
    pub trials: u32,
    pub caught: u32,
    pub safe: u32,
    pub timeout: u32,
    /// Mean elapsed time over Safe outcomes only; `None` when no trial ended
    /// Safe (avoids a 0/0).
    pub avg_safe_time_s: Option<f64>,
}

impl BatchSummary {
    /// Fraction of trials with the given count (0.0 for an empty batch).
    pub fn fraction(&self, count: u32) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64
        }
    }
}

// ── run_batch ────────────────────────────────────────────────────────────────

/// Run `config.num_trials` independent trials and collect their records.
///
/// Fails fast on an invalid configuration — no trial runs on `Err`.  Each
/// trial derives its own RNG stream from `(config.seed, attempt_id)`, so a
/// fixed seed reproduces the exact record sequence, sequential or parallel.
///
/// Observer hooks fire per completed trial (in attempt-id order) and once at
/// batch end.
pub fn run_batch<O: BatchObserver>(
    config: &BatchConfig,
    observer: &mut O,
) -> SimResult<BatchResult> {
    config.validate()?;

    let records = collect_records(config);

    for record in &records {
        observer.on_trial_end(record);
    }

    let result = BatchResult { records };
    observer.on_batch_end(&result.summary());
    Ok(result)
}

/// Run one trial end to end.  Shared by the sequential and parallel paths.
fn run_one(config: &BatchConfig, attempt_id: u32) -> TrialRecord {
    let mut rng = TrialRng::for_attempt(config.seed, attempt_id);
    Trial::spawn(&config.scenario, &mut rng).run(attempt_id)
}

#[cfg(not(feature = "parallel"))]
fn collect_records(config: &BatchConfig) -> Vec<TrialRecord> {
    (1..=config.num_trials)
        .map(|attempt_id| run_one(config, attempt_id))
        .collect()
}

#[cfg(feature = "parallel")]
fn collect_records(config: &BatchConfig) -> Vec<TrialRecord> {
    use rayon::prelude::*;

    // Ordered parallel map: collect() preserves the attempt-id order of the
    // input range, and every trial owns its agents and RNG, so the output is
    // byte-identical to the sequential path.
    (1..=config.num_trials)
        .into_par_iter()
        .map(|attempt_id| run_one(config, attempt_id))
        .collect()
}
