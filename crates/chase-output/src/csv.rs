//! CSV output backend.
//!
//! Writes one file with the header
//! `attempt_id,outcome,time_s,evader_x,evader_y` and one row per trial.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use chase_core::TrialRecord;

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Column headers, in the order consumers expect.
pub const HEADERS: [&str; 5] = ["attempt_id", "outcome", "time_s", "evader_x", "evader_y"];

/// Writes trial records to a single CSV file.
pub struct CsvWriter {
    records: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut records = Writer::from_path(path)?;
        records.write_record(HEADERS)?;
        Ok(Self { records, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_records(&mut self, records: &[TrialRecord]) -> OutputResult<()> {
        for r in records {
            self.records.write_record(&[
                r.attempt_id.to_string(),
                r.outcome.as_str().to_string(),
                r.time_s.to_string(),
                r.evader_x.to_string(),
                r.evader_y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        Ok(())
    }
}
