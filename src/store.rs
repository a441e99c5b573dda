use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Sample;

pub const DATA_PATH: &str = "data.json";

pub const RETENTION_CAP: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogDocument {
    pub logs: Vec<Sample>,
}

pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<LogDocument> {
        if !self.path.exists() {
            return Ok(LogDocument::default());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| ("couldn't read the log file", e))?;
        serde_json::from_str(&raw).map_err(|e| ("couldn't parse the log file", e).into())
    }

    // Full overwrite, no temp file, no lock. Invocations are expected to be
    // serialized by the scheduler; overlapping runs are last-writer-wins.
    pub fn persist(&self, doc: &LogDocument) -> Result<()> {
        let raw =
            serde_json::to_string_pretty(doc).map_err(|e| ("JSON serialization failed", e))?;
        fs::write(&self.path, raw).map_err(|e| ("couldn't write the log file", e).into())
    }
}

// The comparison targets the last entry in insertion order, not the
// chronologically newest one; normalize() runs after this. See the
// dedup_follows_insertion_order_not_time_order test.
pub fn append_if_changed(mut doc: LogDocument, sample: Sample) -> LogDocument {
    let last = doc.logs.last().map(|s| s.count);
    if last != Some(sample.count) {
        doc.logs.push(sample);
    }
    doc
}

pub fn normalize(mut doc: LogDocument) -> LogDocument {
    doc.logs.sort_by_key(|s| s.time);
    let excess = doc.logs.len().saturating_sub(RETENTION_CAP);
    doc.logs.drain(..excess);
    doc
}
