//! # screener-core
//!
//! Foundation crate for the screener backend.
//! Defines config, constants, errors, and the classifier trait.
//! The model and server crates both depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ServerConfig;
pub use errors::{ScreenerError, ScreenerResult};
pub use traits::IClassifier;
