//! JSON-file submission backend.
//!
//! Writes one pretty-printed JSON file per episode, named after the episode
//! start time, under a configured directory.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use crate::{SubmitReceipt, TraceResult, TrajectoryRecord, TrajectorySink};

/// Writes each submitted record to `<dir>/<start_time>.json`.
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileSink { dir: dir.into() }
    }
}

impl TrajectorySink for JsonFileSink {
    fn submit(&mut self, record: &TrajectoryRecord) -> TraceResult<SubmitReceipt> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{}.json", record.start_time));
        let file = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(file, record)?;
        Ok(SubmitReceipt {
            destination: path.display().to_string(),
        })
    }
}
