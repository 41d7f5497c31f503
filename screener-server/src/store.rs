//! Filesystem persistence of session records.
//!
//! One indent-4 JSON file per record, named by a second-granularity
//! local timestamp. Same-second writes collide on the filename and the
//! last writer wins; the store does not guard against that.

use std::path::{Path, PathBuf};

use chrono::Local;
use screener_core::constants::{RECORD_FILE_PREFIX, RECORD_TIMESTAMP_FORMAT};
use screener_core::errors::StoreError;
use serde::Serialize;
use serde_json::Value;

/// Outcome of a successful write: the timestamp used and where the
/// record landed. The response timestamp and the filename always agree.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub timestamp: String,
    pub path: PathBuf,
}

/// Writes session records under a fixed data directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist one record, stamped with the current local time.
    pub fn save(&self, record: &Value) -> Result<StoredRecord, StoreError> {
        let timestamp = Local::now().format(RECORD_TIMESTAMP_FORMAT).to_string();
        self.save_at(&timestamp, record)
    }

    /// Persist one record under an explicit timestamp.
    ///
    /// Creates the data directory if absent (idempotent) and overwrites
    /// any existing file with the same timestamp.
    pub fn save_at(&self, timestamp: &str, record: &Value) -> Result<StoredRecord, StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::DirCreateFailed {
            dir: self.dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let path = self
            .dir
            .join(format!("{RECORD_FILE_PREFIX}{timestamp}.json"));

        let body = to_indented_json(record)?;
        std::fs::write(&path, body).map_err(|e| StoreError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(StoredRecord {
            timestamp: timestamp.to_string(),
            path,
        })
    }
}

/// Serialize with 4-space indentation, matching the stored-record format.
fn to_indented_json(record: &Value) -> Result<Vec<u8>, StoreError> {
    let mut out = Vec::with_capacity(256);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    record
        .serialize(&mut ser)
        .map_err(|e| StoreError::SerializeFailed {
            reason: e.to_string(),
        })?;
    Ok(out)
}
