//! `POST /collect` — persist one session record as a timestamped file.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;

/// Acknowledgement carrying the timestamp used for the filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectResponse {
    pub status: String,
    pub timestamp: String,
}

/// Validate the body and write it verbatim to the record store.
///
/// Absent, unparseable, and empty payloads (`null`, `false`, `0`, `""`,
/// `[]`, `{}`) are client errors (400, fixed message). I/O and
/// serialization failures are processing failures (500).
pub async fn collect(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CollectResponse>, ApiError> {
    let raw = String::from_utf8_lossy(&body);
    info!(body = %raw, "collect request received");

    let data: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if is_empty_payload(&data) {
        warn!("collect rejected: no JSON data received");
        return Err(ApiError::EmptyBody);
    }

    let stored = state.store.save(&data)?;

    info!(path = %stored.path.display(), "session record written");
    Ok(Json(CollectResponse {
        status: "success".to_string(),
        timestamp: stored.timestamp,
    }))
}

/// Emptiness predicate for submitted payloads.
///
/// `null`, `false`, zero, the empty string, and empty collections all
/// count as "no data" and are rejected before touching the filesystem.
fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
