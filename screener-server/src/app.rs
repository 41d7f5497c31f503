//! Application state and router.

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use screener_core::traits::IClassifier;

use crate::handlers;
use crate::statics;
use crate::store::RecordStore;

/// Shared per-process state, constructed once at startup and passed into
/// every handler. The classifier handle is read-only.
pub struct AppState {
    pub classifier: Arc<dyn IClassifier>,
    pub store: RecordStore,
    pub static_dir: PathBuf,
}

/// Build the HTTP router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(statics::index))
        .route("/predict", post(handlers::predict))
        .route("/collect", post(handlers::collect))
        .route("/{*path}", get(statics::asset))
        .with_state(state)
}
