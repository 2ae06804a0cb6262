//! Batch observer trait for progress reporting and data collection.

use chase_core::TrialRecord;

use crate::batch::BatchSummary;

/// Callbacks invoked by [`run_batch`][crate::run_batch] as records become
/// available.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks fire in attempt-id order even
/// when trials ran in parallel.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl BatchObserver for ProgressPrinter {
///     fn on_trial_end(&mut self, record: &TrialRecord) {
///         if record.attempt_id % 100 == 0 {
///             println!("finished attempt {}", record.attempt_id);
///         }
///     }
/// }
/// ```
pub trait BatchObserver {
    /// Called once per completed trial, in attempt-id order.
    fn on_trial_end(&mut self, _record: &TrialRecord) {}

    /// Called once after the last trial, with the batch aggregates.
    fn on_batch_end(&mut self, _summary: &BatchSummary) {}
}

/// A [`BatchObserver`] that does nothing.  Use when you need to call
/// `run_batch` but don't want callbacks.
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}
