//! Per-job events and console output.
mod console;

#[cfg(test)]
pub(crate) mod test_support;

pub use console::{ConsoleSink, job_line, preview, print_summary, summary_lines};

use crate::dispatch::RequestOutcome;

/// Receives one event per finished job, in completion order.
pub trait EventSink: Send + Sync {
    fn job_finished(&self, index: usize, outcome: &RequestOutcome);
}
