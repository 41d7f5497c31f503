/// Record-store errors for filesystem persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create data directory {dir}: {reason}")]
    DirCreateFailed { dir: String, reason: String },

    #[error("failed to write record {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("failed to serialize record: {reason}")]
    SerializeFailed { reason: String },
}
