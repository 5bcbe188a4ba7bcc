//! `gridcook-trace` — trajectory recording and submission.
//!
//! One [`TrajectoryLog`] accumulates an episode's per-tick transitions as
//! three index-aligned sequences, then [`finalize`][TrajectoryLog::finalize]s
//! (exactly once, by consuming the log) into the persisted
//! [`TrajectoryRecord`] shape.  The record is handed to a
//! [`TrajectorySink`] backend:
//!
//! | Sink                    | Destination                               |
//! |-------------------------|-------------------------------------------|
//! | [`MemorySink`]          | In-process buffer (default, tests)        |
//! | [`JsonFileSink`]        | One JSON file per episode                 |
//! | `HttpSink` (`http`)     | JSON POST to a configured endpoint        |
//!
//! Submission is attempted once; a failure carries its reason back to the
//! caller to be logged, never retried, and never allowed to block episode
//! cleanup.

pub mod error;
pub mod json;
pub mod log;
pub mod record;
pub mod sink;

#[cfg(feature = "http")]
pub mod http;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TraceError, TraceResult};
#[cfg(feature = "http")]
pub use http::HttpSink;
pub use json::JsonFileSink;
pub use log::TrajectoryLog;
pub use record::{TrajectoryData, TrajectoryRecord};
pub use sink::{MemorySink, SubmitReceipt, TrajectorySink};
