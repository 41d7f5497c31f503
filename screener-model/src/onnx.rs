//! ONNX Runtime classifier.
//!
//! Loads a classifier exported to ONNX (e.g. an xgboost or sklearn model
//! run through a converter) via the `ort` crate (v2), and predicts one
//! integer label per feature vector.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use screener_core::errors::ModelError;
use screener_core::traits::IClassifier;
use tracing::debug;

use crate::decode;

/// ONNX-backed classifier using the `ort` crate.
///
/// Wraps an ort `Session` and handles tensor construction, inference, and
/// decoding of the output into a plain integer label.
#[derive(Debug)]
pub struct OnnxClassifier {
    /// Session requires `&mut self` for `run`, so we wrap in Mutex
    /// to satisfy the `&self` trait requirement.
    session: Mutex<Session>,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxClassifier {}

impl OnnxClassifier {
    /// Load the classifier artifact from the given path.
    ///
    /// # Errors
    /// Returns `ModelError::LoadFailed` if the artifact is missing or
    /// cannot be loaded. Callers treat this as fatal at startup.
    pub fn load(model_path: &str) -> Result<Self, ModelError> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(ModelError::LoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            });
        }

        let session = Session::builder()
            .map_err(|e| ModelError::LoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .with_intra_threads(2)
            .map_err(|e| ModelError::LoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .commit_from_file(model_path)
            .map_err(|e| ModelError::LoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-classifier")
            .to_string();

        debug!(model = %model_name, "ONNX classifier loaded");

        Ok(Self {
            session: Mutex::new(session),
            model_name,
        })
    }

    /// Run inference on a single feature vector shaped to one row.
    fn infer(&self, features: &[f32]) -> Result<i64, ModelError> {
        let n = features.len();

        let input_tensor = Tensor::from_array((vec![1i64, n as i64], features.to_vec()))
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut session = self.session.lock().map_err(|e| ModelError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // First output carries the label (or the class scores, depending
        // on how the model was exported).
        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| ModelError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        // sklearn/xgboost converters emit the label as int64; fall back
        // to f32 scores when the export kept the raw class axis.
        if let Ok((_shape, data)) = output.try_extract_tensor::<i64>() {
            return decode::label_from_ints(data);
        }

        let (_shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| ModelError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        decode::label_from_scores(data)
    }
}

impl IClassifier for OnnxClassifier {
    fn predict(&self, features: &[f32]) -> Result<i64, ModelError> {
        self.infer(features)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
