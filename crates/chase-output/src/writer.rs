//! The `OutputWriter` trait implemented by result persistence backends.

use chase_core::TrialRecord;

use crate::OutputResult;

/// Trait implemented by persistence backends (currently CSV).
///
/// From the observer's perspective all methods are infallible — errors are
/// stored internally and retrieved with
/// [`RecordingObserver::take_error`][crate::RecordingObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of trial records.
    fn write_records(&mut self, records: &[TrialRecord]) -> OutputResult<()>;

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
