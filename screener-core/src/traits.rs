use crate::errors::ModelError;

/// A pre-trained classification model exposing a single predict operation.
///
/// Implementations are loaded once at process startup and shared read-only
/// across request handlers.
pub trait IClassifier: Send + Sync {
    /// Predict the class label for one feature vector.
    ///
    /// The vector is shaped to a one-row matrix before inference; arity
    /// mismatches against the trained input dimensionality surface as
    /// `ModelError::InferenceFailed`.
    fn predict(&self, features: &[f32]) -> Result<i64, ModelError>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
