//! `POST /predict` — run the classifier on one feature vector.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;

/// Successful inference response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: i64,
}

/// Validate the body, convert `features` to a flat vector, and predict.
///
/// Missing/unparseable bodies and bodies without a `features` key are
/// client errors (400, fixed message). Everything past validation — a
/// non-numeric element, an arity mismatch against the trained model —
/// is a processing failure (500, underlying message exposed).
pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    let raw = String::from_utf8_lossy(&body);
    info!(body = %raw, "predict request received");

    let data: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(_) => {
            warn!("predict rejected: body is not valid JSON");
            return Err(ApiError::InvalidInput);
        }
    };

    let Some(features) = data.get("features") else {
        warn!("predict rejected: 'features' key missing");
        return Err(ApiError::InvalidInput);
    };

    let vector = to_feature_vector(features)?;
    let prediction = state.classifier.predict(&vector)?;

    info!(prediction, "prediction result");
    Ok(Json(PredictResponse { prediction }))
}

/// Convert the `features` value into a flat `f32` vector.
fn to_feature_vector(features: &Value) -> Result<Vec<f32>, ApiError> {
    let items = features.as_array().ok_or_else(|| {
        ApiError::Processing(format!(
            "'features' must be an array of numbers, got {features}"
        ))
    })?;

    items
        .iter()
        .map(|v| {
            v.as_f64().map(|f| f as f32).ok_or_else(|| {
                ApiError::Processing(format!("non-numeric feature value: {v}"))
            })
        })
        .collect()
}
