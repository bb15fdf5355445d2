use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{FetchArgs, MAX_INFLIGHT_LIMIT, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments. Flags given on the command
/// line keep their values.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut FetchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.as_ref()
    {
        args.url.clone_from(url);
    }

    if !is_cli(matches, "requests")
        && let Some(requests) = config.requests
    {
        args.requests = ensure_positive_usize(requests, "requests")?;
    }

    if !is_cli(matches, "max_inflight")
        && let Some(max_inflight) = config.max_inflight
    {
        args.max_inflight = ensure_positive_usize(max_inflight, "max_inflight")?
            .ensure_at_most(MAX_INFLIGHT_LIMIT)
            .map_err(|err| {
                AppError::config(ConfigError::FieldOutOfRange {
                    field: "max_inflight",
                    source: err,
                })
            })?;
    }

    if !is_cli(matches, "max_idle")
        && let Some(max_idle) = config.max_idle
    {
        args.max_idle = max_idle;
    }

    if !is_cli(matches, "preview_chars")
        && let Some(preview_chars) = config.preview_chars
    {
        args.preview_chars = preview_chars;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = Some(to_duration(timeout, "timeout")?);
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = Some(to_duration(timeout, "connect_timeout")?);
    }

    if !is_cli(matches, "insecure")
        && let Some(insecure) = config.insecure
    {
        args.insecure = insecure;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && matches.value_source("no_color") != Some(ValueSource::EnvVariable)
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldMustBePositive { field, source: err }))
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}
