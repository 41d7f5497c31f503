//! Shared fixtures: a stub classifier and app state backed by a tempdir.
#![allow(dead_code)] // not every test binary uses every fixture

use std::path::PathBuf;
use std::sync::Arc;

use screener_core::errors::ModelError;
use screener_core::traits::IClassifier;
use screener_server::{AppState, RecordStore};

/// Fixed-output classifier so handler tests need no live model.
pub struct StubClassifier {
    pub label: i64,
    pub fail_with: Option<String>,
}

impl StubClassifier {
    pub fn returning(label: i64) -> Self {
        Self {
            label,
            fail_with: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            label: 0,
            fail_with: Some(reason.to_string()),
        }
    }
}

impl IClassifier for StubClassifier {
    fn predict(&self, _features: &[f32]) -> Result<i64, ModelError> {
        match &self.fail_with {
            Some(reason) => Err(ModelError::InferenceFailed {
                reason: reason.clone(),
            }),
            None => Ok(self.label),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// App state with the given classifier, record store and static dir all
/// rooted in `dir`.
pub fn state_in(dir: &std::path::Path, classifier: StubClassifier) -> Arc<AppState> {
    Arc::new(AppState {
        classifier: Arc::new(classifier),
        store: RecordStore::new(dir.join("data")),
        static_dir: PathBuf::from(dir),
    })
}
