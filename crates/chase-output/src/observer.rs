//! `RecordingObserver<W>` — bridges `BatchObserver` to an `OutputWriter`.

use chase_core::TrialRecord;
use chase_sim::{BatchObserver, BatchSummary};

use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`BatchObserver`] that streams every trial record to an
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After `run_batch` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RecordingObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RecordingObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run_batch` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> BatchObserver for RecordingObserver<W> {
    fn on_trial_end(&mut self, record: &TrialRecord) {
        let result = self.writer.write_records(std::slice::from_ref(record));
        self.store_err(result);
    }

    fn on_batch_end(&mut self, _summary: &BatchSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
