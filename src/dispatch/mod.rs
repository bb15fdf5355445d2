//! Bounded fan-out of GET jobs over a shared transport.
//!
//! Every job runs as its own task, but no more than `max_inflight` of them
//! hold a request at once. The remaining jobs wait on a FIFO semaphore and
//! are admitted as permits free up. Outcomes come back index-aligned with
//! the input, independent of completion order.
mod gate;
mod job;
mod outcome;
mod run;


pub use job::{RequestJob, build_jobs, repeat_url};
pub use outcome::{RequestOutcome, RunSummary};
pub use run::{DispatchConfig, dispatch};
