//! # screener-server
//!
//! The HTTP surface: two stateless JSON handlers (`/predict`, `/collect`)
//! over a shared read-only classifier handle, plus static serving of the
//! front-end bundle. All request state lives in [`app::AppState`]; there
//! is no ambient global.

pub mod app;
pub mod error;
pub mod handlers;
pub mod statics;
pub mod store;
pub mod telemetry;

pub use app::AppState;
pub use error::ApiError;
pub use store::RecordStore;
