use clap::Parser;
use std::time::Duration;

use super::parsers::{
    parse_bool_env, parse_duration_value, parse_max_inflight, parse_positive_usize,
};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Issue many HTTP GET requests to one endpoint with a hard cap on in-flight requests, printing each result and the total elapsed time."
)]
pub struct FetchArgs {
    /// Target URL requested by every job
    #[arg(long, short, default_value = super::DEFAULT_URL)]
    pub url: String,

    /// Number of identical requests to issue (default: 100)
    #[arg(
        long,
        short = 'n',
        default_value = "100",
        value_parser = parse_positive_usize
    )]
    pub requests: PositiveUsize,

    /// Hard cap on concurrently in-flight requests (default: 5)
    #[arg(
        long = "max-inflight",
        short = 'c',
        alias = "max-connections",
        default_value = "5",
        value_parser = parse_max_inflight
    )]
    pub max_inflight: PositiveUsize,

    /// Idle connections kept open for reuse per host (default: 50)
    #[arg(long = "max-idle", alias = "max-keepalive", default_value_t = super::DEFAULT_MAX_IDLE)]
    pub max_idle: usize,

    /// Characters of each response body to print (default: 20)
    #[arg(long = "preview-chars", default_value_t = super::DEFAULT_PREVIEW_CHARS)]
    pub preview_chars: usize,

    /// Per-request timeout (supports ms/s/m/h); unbounded when unset
    #[arg(long = "timeout", value_parser = parse_duration_value)]
    pub request_timeout: Option<Duration>,

    /// Connect timeout (supports ms/s/m/h); unbounded when unset
    #[arg(long = "connect-timeout", value_parser = parse_duration_value)]
    pub connect_timeout: Option<Duration>,

    /// Skip TLS certificate and hostname verification (insecure)
    #[arg(long, short = 'k')]
    pub insecure: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by REQGATE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./reqgate.toml or ./reqgate.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
