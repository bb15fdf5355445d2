pub(crate) const DEFAULT_URL: &str = "https://httpbin.org/get";
pub(crate) const DEFAULT_MAX_IDLE: usize = 50;
pub(crate) const DEFAULT_PREVIEW_CHARS: usize = 20;
/// Largest in-flight cap the concurrency gate can represent.
pub(crate) const MAX_INFLIGHT_LIMIT: usize = tokio::sync::Semaphore::MAX_PERMITS;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("reqgate/", env!("CARGO_PKG_VERSION"));
