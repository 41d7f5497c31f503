//! # screener-model
//!
//! The Predictor: a pre-trained classification model loaded from an ONNX
//! artifact via the `ort` crate (v2). Loaded exactly once at process
//! startup; inference is read-only.

pub mod decode;
pub mod onnx;

pub use onnx::OnnxClassifier;
