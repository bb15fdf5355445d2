use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::args::PositiveUsize;
use crate::error::{AppError, AppResult, DispatchError};

/// Counting gate over in-flight requests. Waiters are admitted in FIFO order.
#[derive(Debug, Clone)]
pub(crate) struct ConcurrencyGate {
    permits: Arc<Semaphore>,
}

impl ConcurrencyGate {
    /// Caps above [`Semaphore::MAX_PERMITS`] are clamped to it.
    pub(crate) fn new(max_inflight: PositiveUsize) -> Self {
        let permits = max_inflight.get().min(Semaphore::MAX_PERMITS);
        Self {
            permits: Arc::new(Semaphore::new(permits)),
        }
    }

    /// Waits for a free slot. The slot is released when the permit drops.
    pub(crate) async fn admit(&self, index: usize) -> AppResult<OwnedSemaphorePermit> {
        Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_err| AppError::dispatch(DispatchError::GateClosed { index }))
    }

    #[cfg(test)]
    pub(crate) fn available(&self) -> usize {
        self.permits.available_permits()
    }

    #[cfg(test)]
    pub(crate) fn close(&self) {
        self.permits.close();
    }
}
