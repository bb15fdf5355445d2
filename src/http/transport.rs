use async_trait::async_trait;
use reqwest::Client;

use crate::dispatch::RequestJob;
use crate::error::{AppError, AppResult, FetchError, HttpError};

use super::client::{ClientSettings, build_client};

/// Performs the GET for one job and returns the response body as text.
#[async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] for failures confined to this
    /// request and [`FetchError::Fatal`] for anything that should stop the
    /// whole batch.
    async fn get(&self, job: &RequestJob) -> Result<String, FetchError>;
}

/// Transport over a single `reqwest::Client`. Connections are pooled and
/// reused across jobs for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error when the client cannot be built.
    pub fn new(settings: &ClientSettings) -> AppResult<Self> {
        Ok(Self {
            client: build_client(settings)?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, job: &RequestJob) -> Result<String, FetchError> {
        let response = self
            .client
            .get(job.url.clone())
            .send()
            .await
            .map_err(|err| classify(job, err))?;
        response.text().await.map_err(|err| classify(job, err))
    }
}

/// Builder errors mean the request itself is malformed, so they stop the
/// batch. Everything else happened on the wire and stays with the job.
fn classify(job: &RequestJob, err: reqwest::Error) -> FetchError {
    if err.is_builder() {
        return FetchError::Fatal(AppError::http(HttpError::RequestBuild {
            url: job.url.to_string(),
            source: err,
        }));
    }
    FetchError::transport(describe(&err))
}

pub(super) fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}
