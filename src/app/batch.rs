use std::sync::Arc;

use tokio::time::Instant;
use tracing::info;

use crate::dispatch::{DispatchConfig, RequestJob, RequestOutcome, RunSummary, dispatch};
use crate::error::AppResult;
use crate::http::Transport;
use crate::sinks::EventSink;

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub outcomes: Vec<RequestOutcome>,
    pub summary: RunSummary,
}

/// Dispatches `jobs` and measures wall-clock time from the first spawn to
/// the last outcome.
///
/// # Errors
///
/// Returns any fatal error raised by [`dispatch`].
pub async fn run_batch<T, S>(
    jobs: Vec<RequestJob>,
    config: &DispatchConfig,
    transport: Arc<T>,
    sink: Arc<S>,
) -> AppResult<BatchReport>
where
    T: Transport + ?Sized + 'static,
    S: EventSink + ?Sized + 'static,
{
    let started = Instant::now();
    let outcomes = dispatch(jobs, config, transport, sink).await?;
    let summary = RunSummary::from_outcomes(&outcomes, started.elapsed());
    info!(
        "Finished {} requests: {} succeeded, {} failed",
        summary.total, summary.succeeded, summary.failed
    );
    Ok(BatchReport { outcomes, summary })
}
