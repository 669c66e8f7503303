pub mod dispatch;
pub mod install;
pub mod launch;
pub mod tweak;

use crate::installer::Outcome;
use crate::console::ConsoleReporter;

/// One-line tally printed after multi-name batches.
pub(crate) fn summarize(verb: &str, outcomes: &[(String, Outcome)], reporter: &dyn ConsoleReporter) {
    if outcomes.len() < 2 {
        return;
    }
    let mut done = 0usize;
    let mut declined = 0usize;
    let mut script_errors = 0usize;
    let mut failed = Vec::new();
    for (name, outcome) in outcomes {
        match outcome {
            Outcome::Completed(result) => {
                done += 1;
                if !result.success() {
                    script_errors += 1;
                }
            }
            Outcome::Declined => declined += 1,
            Outcome::Skipped(e) => failed.push(format!("{name} ({})", e.kind())),
        }
    }
    let mut line = format!("[i] {done} {verb}, {declined} declined, {} failed", failed.len());
    if script_errors > 0 {
        line.push_str(&format!(" ({script_errors} {verb} with a non-zero exit)"));
    }
    if !failed.is_empty() {
        line.push_str(&format!(": {}", failed.join(", ")));
    }
    if failed.is_empty() && script_errors == 0 {
        reporter.info(&line);
    } else {
        reporter.warn(&line);
    }
}
