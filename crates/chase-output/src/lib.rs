//! `chase-output` — result persistence and report rendering for the chase
//! simulator.
//!
//! The CSV backend implements [`OutputWriter`] and is driven by
//! [`RecordingObserver`], which implements `chase_sim::BatchObserver`.
//!
//! # Record shape (compatibility-critical)
//!
//! One row per trial, exactly these columns in this order:
//!
//! ```text
//! attempt_id,outcome,time_s,evader_x,evader_y
//! ```
//!
//! Downstream consumers key on this shape; do not reorder or rename.
//!
//! # Usage
//!
//! ```rust,ignore
//! use chase_output::{CsvWriter, RecordingObserver};
//!
//! let writer = CsvWriter::new(Path::new("results.csv"))?;
//! let mut obs = RecordingObserver::new(writer);
//! let result = run_batch(&config, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! println!("{}", chase_output::render_summary(&result.summary()));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use report::{render_detail, render_summary};
pub use writer::OutputWriter;
