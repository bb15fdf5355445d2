use crate::dispatch::{RequestOutcome, RunSummary};

use super::EventSink;

/// Prints `Task <index>: ...` lines to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    preview_chars: usize,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }
}

impl EventSink for ConsoleSink {
    fn job_finished(&self, index: usize, outcome: &RequestOutcome) {
        println!("{}", job_line(index, outcome, self.preview_chars));
    }
}

#[must_use]
pub fn job_line(index: usize, outcome: &RequestOutcome, preview_chars: usize) -> String {
    match outcome {
        RequestOutcome::Success { body } => {
            format!("Task {}: {}", index, preview(body, preview_chars))
        }
        RequestOutcome::Failure { message } => {
            format!("Task {}: An error occurred: {}", index, message)
        }
    }
}

/// First `chars` characters of `body`, cut on a character boundary.
#[must_use]
pub fn preview(body: &str, chars: usize) -> &str {
    body.char_indices()
        .nth(chars)
        .and_then(|(end, _)| body.get(..end))
        .unwrap_or(body)
}

#[must_use]
pub fn summary_lines(summary: &RunSummary) -> [String; 2] {
    [
        format!("Total number of requests: {}", summary.total),
        format!(
            "Time elapsed: {:.2} seconds",
            summary.elapsed.as_secs_f64()
        ),
    ]
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}
