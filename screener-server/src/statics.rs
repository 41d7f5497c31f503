//! Static serving of the front-end bundle.
//!
//! `GET /` serves `index.html`; every other unmatched GET path serves the
//! matching file under the static directory (the WebGL build's `.js`,
//! `.wasm`, `.data` assets). Paths escaping the static directory 404.

use std::path::{Component, Path as FsPath};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::app::AppState;

/// `GET /` — the front-end entry file.
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    serve_file(&state, "index.html").await
}

/// `GET /{*path}` — any other bundle asset.
pub async fn asset(State(state): State<Arc<AppState>>, Path(path): Path<String>) -> Response {
    serve_file(&state, &path).await
}

async fn serve_file(state: &AppState, rel: &str) -> Response {
    let rel_path = FsPath::new(rel);
    // Only plain path segments: no traversal, no absolute paths.
    if !rel_path
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return StatusCode::NOT_FOUND.into_response();
    }

    let full = state.static_dir.join(rel_path);
    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            let content_type = content_type_for(rel);
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

fn content_type_for(path: &str) -> &'static str {
    match FsPath::new(path).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
