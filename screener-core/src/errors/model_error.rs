/// Classifier errors: artifact loading and inference.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed for {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },
}
