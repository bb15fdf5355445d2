//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::FetchArgs;
pub use types::PositiveUsize;

pub(crate) use defaults::{
    DEFAULT_MAX_IDLE, DEFAULT_PREVIEW_CHARS, DEFAULT_URL, DEFAULT_USER_AGENT, MAX_INFLIGHT_LIMIT,
};
pub(crate) use parsers::parse_duration_value;
#[cfg(test)]
pub(crate) use test_support::parse_test_args;
