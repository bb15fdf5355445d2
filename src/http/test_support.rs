use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::dispatch::RequestJob;
use crate::error::{AppError, FetchError};

use super::Transport;

/// Deterministic transport that answers `OK-<index>` after `delay` and
/// tracks how many calls overlap.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    delay: Duration,
    failing: BTreeSet<usize>,
    fatal: Option<usize>,
    active: AtomicUsize,
    high_water: AtomicUsize,
    calls: AtomicUsize,
}

impl FakeTransport {
    pub(crate) fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub(crate) fn failing_on<I>(mut self, indexes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.failing.extend(indexes);
        self
    }

    pub(crate) const fn fatal_on(mut self, index: usize) -> Self {
        self.fatal = Some(index);
        self
    }

    pub(crate) fn high_water(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }

    pub(crate) fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, job: &RequestJob) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now_active = self.active.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        self.high_water.fetch_max(now_active, Ordering::SeqCst);
        sleep(self.delay).await;
        self.active.fetch_sub(1, Ordering::SeqCst);

        if self.fatal == Some(job.index) {
            return Err(FetchError::Fatal(AppError::from(std::io::Error::other(
                format!("simulated fatal error on job {}", job.index),
            ))));
        }
        if self.failing.contains(&job.index) {
            return Err(FetchError::transport(format!(
                "simulated connection error on job {}",
                job.index
            )));
        }
        Ok(format!("OK-{}", job.index))
    }
}
