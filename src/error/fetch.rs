use thiserror::Error;

use super::AppError;

/// Failure of a single GET. Only `Transport` is recovered per job.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{message}")]
    Transport { message: String },
    #[error(transparent)]
    Fatal(#[from] AppError),
}

impl FetchError {
    pub fn transport<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self::Transport {
            message: message.into(),
        }
    }
}
