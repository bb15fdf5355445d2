use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build request for '{url}': {source}")]
    RequestBuild {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
