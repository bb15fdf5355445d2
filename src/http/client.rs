use std::time::Duration;

use reqwest::Client;
use tracing::{error, warn};

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Settings for the one client shared by a whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub max_idle_per_host: usize,
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Accept invalid certificates and hostnames.
    pub insecure: bool,
}

pub(super) fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .pool_max_idle_per_host(settings.max_idle_per_host);

    if let Some(timeout) = settings.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }
    if let Some(timeout) = settings.connect_timeout {
        client_builder = client_builder.connect_timeout(timeout);
    }

    if settings.insecure {
        warn!("TLS certificate and hostname verification is disabled (--insecure).");
        client_builder = client_builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}
