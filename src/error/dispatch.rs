use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Concurrency gate was closed while job {index} was waiting.")]
    GateClosed { index: usize },
    #[error("Job {index} finished without recording an outcome.")]
    MissingOutcome { index: usize },
    #[error("Job {index} reported an index outside the batch of {total}.")]
    IndexOutOfRange { index: usize, total: usize },
}
