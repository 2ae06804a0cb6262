//! chase — pursuer-vs-evader Monte Carlo demo.
//!
//! Runs a batch of independent chase trials and reports the outcome split,
//! writing one CSV row per trial for downstream analysis.
//!
//! ```text
//! chase [num_trials] [seed]
//! ```
//!
//! Scenario parameters are compile-time constants below; edit and re-run to
//! explore the parameter space.

use std::path::PathBuf;

use anyhow::{Context, Result};

use chase_core::{BatchConfig, Point2, ScenarioConfig};
use chase_output::{render_detail, render_summary, CsvWriter, RecordingObserver};
use chase_sim::run_batch;

// ── Scenario constants ────────────────────────────────────────────────────────

const FIELD_SIZE: f64 = 100.0;
const SAFE_ZONE: (f64, f64) = (50.0, 50.0);
const PURSUER_SPEED: f64 = 5.0;
const EVADER_SPEED: f64 = 4.0;
const CAPTURE_RADIUS: f64 = 1.0;
const STEP_DURATION: f64 = 0.1;

const DEFAULT_TRIALS: u32 = 100;
const DEFAULT_SEED: u64 = 42;

/// How many per-attempt detail lines to print after the summary.
const DETAIL_LINES: usize = 5;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let num_trials: u32 = match args.next() {
        Some(s) => s.parse().context("num_trials must be a positive integer")?,
        None => DEFAULT_TRIALS,
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse().context("seed must be an integer")?,
        None => DEFAULT_SEED,
    };

    let config = BatchConfig {
        scenario: ScenarioConfig {
            field_size: FIELD_SIZE,
            safe_zone: Point2::from(SAFE_ZONE),
            pursuer_speed: PURSUER_SPEED,
            evader_speed: EVADER_SPEED,
            capture_radius: CAPTURE_RADIUS,
            step_duration: STEP_DURATION,
        },
        num_trials,
        seed,
    };
    config.validate().context("invalid scenario parameters")?;

    let csv_path = PathBuf::from(format!("simulation_results-{num_trials}.csv"));

    println!("--- Starting {num_trials} Trials of Pursuer vs. Evader ---");
    println!("Seed: {seed}  |  Output: {}", csv_path.display());
    println!();

    let writer = CsvWriter::new(&csv_path)
        .with_context(|| format!("cannot open {}", csv_path.display()))?;
    let mut observer = RecordingObserver::new(writer);

    let result = run_batch(&config, &mut observer)?;

    if let Some(e) = observer.take_error() {
        return Err(e).context("failed to persist trial records");
    }

    println!("{}", render_summary(&result.summary()));

    println!("--- First {DETAIL_LINES} Detailed Results ---");
    for record in result.records.iter().take(DETAIL_LINES) {
        println!("{}", render_detail(record));
    }

    Ok(())
}
