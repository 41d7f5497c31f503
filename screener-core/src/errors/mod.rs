//! Error types for the screener backend, one enum per subsystem.

mod model_error;
mod store_error;

pub use model_error::ModelError;
pub use store_error::StoreError;

/// Top-level error aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ScreenerError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config error: {reason}")]
    Config { reason: String },
}

/// Result alias used throughout the workspace.
pub type ScreenerResult<T> = Result<T, ScreenerError>;
