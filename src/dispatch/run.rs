use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::args::PositiveUsize;
use crate::error::{AppError, AppResult, DispatchError, FetchError};
use crate::http::Transport;
use crate::sinks::EventSink;

use super::gate::ConcurrencyGate;
use super::job::RequestJob;
use super::outcome::RequestOutcome;

/// Limits for one batch. `max_idle_reusable` is applied to the transport's
/// connection pool; the dispatcher itself only enforces `max_inflight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    pub max_inflight: PositiveUsize,
    pub max_idle_reusable: usize,
}

/// Runs every job through `transport`, never letting more than
/// `config.max_inflight` requests be outstanding at once.
///
/// The transport is owned by the caller and shared by all jobs. Each job
/// emits one event to `sink` once its outcome is known.
///
/// # Errors
///
/// Transport failures are recorded as [`RequestOutcome::Failure`] and never
/// fail the batch. A fatal fetch error, a closed gate or a panicked job
/// aborts the remaining jobs and is returned.
pub async fn dispatch<T, S>(
    jobs: Vec<RequestJob>,
    config: &DispatchConfig,
    transport: Arc<T>,
    sink: Arc<S>,
) -> AppResult<Vec<RequestOutcome>>
where
    T: Transport + ?Sized + 'static,
    S: EventSink + ?Sized + 'static,
{
    let total = jobs.len();
    info!(
        "Dispatching {} requests (max in-flight: {}, max idle: {})",
        total, config.max_inflight, config.max_idle_reusable
    );

    let gate = ConcurrencyGate::new(config.max_inflight);
    let mut tasks = JoinSet::new();
    for job in jobs {
        tasks.spawn(run_job(
            job,
            gate.clone(),
            Arc::clone(&transport),
            Arc::clone(&sink),
        ));
    }

    let mut slots: Vec<Option<RequestOutcome>> =
        std::iter::repeat_with(|| None).take(total).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = match joined {
            Ok(Ok(finished)) => finished,
            Ok(Err(err)) => {
                error!("Aborting dispatch: {}", err);
                tasks.abort_all();
                return Err(err);
            }
            Err(err) => {
                error!("Request task failed: {}", err);
                tasks.abort_all();
                return Err(AppError::from(err));
            }
        };
        let slot = slots
            .get_mut(index)
            .ok_or(DispatchError::IndexOutOfRange { index, total })?;
        *slot = Some(outcome);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| AppError::dispatch(DispatchError::MissingOutcome { index }))
        })
        .collect()
}

async fn run_job<T, S>(
    job: RequestJob,
    gate: ConcurrencyGate,
    transport: Arc<T>,
    sink: Arc<S>,
) -> AppResult<(usize, RequestOutcome)>
where
    T: Transport + ?Sized,
    S: EventSink + ?Sized,
{
    let permit = gate.admit(job.index).await?;
    let fetched = transport.get(&job).await;
    drop(permit);

    let outcome = match fetched {
        Ok(body) => {
            debug!("Job {} succeeded ({} bytes)", job.index, body.len());
            RequestOutcome::Success { body }
        }
        Err(FetchError::Transport { message }) => {
            debug!("Job {} failed: {}", job.index, message);
            RequestOutcome::Failure { message }
        }
        Err(FetchError::Fatal(err)) => return Err(err),
    };

    sink.job_finished(job.index, &outcome);
    Ok((job.index, outcome))
}
