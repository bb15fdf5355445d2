//! Batch runner: times one dispatch and summarises it.
mod batch;


pub use batch::{BatchReport, run_batch};
