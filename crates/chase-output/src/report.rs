//! Console report rendering.

use chase_core::TrialRecord;
use chase_sim::BatchSummary;

/// Render the headline statistics block for a completed batch.
pub fn render_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();

    out.push_str("--- Summary Statistics ---\n");
    out.push_str(&format!("Total Trials: {}\n", summary.trials));
    out.push_str(&format!(
        "Evader Escapes (Safe): {} ({:.1}%)\n",
        summary.safe,
        summary.fraction(summary.safe) * 100.0
    ));
    out.push_str(&format!(
        "Pursuer Wins (Caught): {} ({:.1}%)\n",
        summary.caught,
        summary.fraction(summary.caught) * 100.0
    ));
    out.push_str(&format!("Timeouts: {}\n", summary.timeout));

    if let Some(avg) = summary.avg_safe_time_s {
        out.push_str(&format!("Average Escape Time: {avg:.2} seconds\n"));
    }

    out
}

/// Render the one-line detail for a single trial.
pub fn render_detail(record: &TrialRecord) -> String {
    record.to_string()
}
