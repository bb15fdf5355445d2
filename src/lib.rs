//! Core library for the `reqgate` CLI.
//!
//! `reqgate` fans a list of GET requests out over one shared HTTP client
//! while a counting gate keeps at most `max_inflight` of them on the wire.
//! The dispatcher is transport-agnostic: the binary plugs in a
//! `reqwest`-backed transport, tests plug in instrumented fakes.
pub mod app;
pub mod args;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod sinks;
