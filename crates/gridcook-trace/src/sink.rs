//! The `TrajectorySink` trait implemented by all submission backends.

use std::sync::{Arc, Mutex};

use crate::{TraceResult, TrajectoryRecord};

/// Where a finished trajectory went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Human-readable destination: a path, a URL, `"memory"`.
    pub destination: String,
}

/// Trait implemented by the memory, JSON-file, and HTTP backends.
///
/// Submission happens exactly once per episode, at `stop()`.  An error
/// carries the failure reason back to the session, which logs it and
/// finishes cleanup; there is no retry.
pub trait TrajectorySink: Send {
    fn submit(&mut self, record: &TrajectoryRecord) -> TraceResult<SubmitReceipt>;
}

/// Keeps submitted records in an in-process buffer.
///
/// The default sink, and the one tests use: clones share the buffer, so a
/// test can keep a handle while the session owns the sink and assert
/// exactly-once submission afterwards.
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<TrajectoryRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything submitted so far.
    pub fn records(&self) -> Vec<TrajectoryRecord> {
        self.lock().clone()
    }

    /// How many submissions have landed.
    pub fn submission_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TrajectoryRecord>> {
        // A poisoned buffer is still a valid buffer.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TrajectorySink for MemorySink {
    fn submit(&mut self, record: &TrajectoryRecord) -> TraceResult<SubmitReceipt> {
        self.lock().push(record.clone());
        Ok(SubmitReceipt {
            destination: "memory".into(),
        })
    }
}
