//! Error Types
//!
//! Three failure classes exist in the core:
//! - parse degradation (never surfaced; extraction substitutes empty parts),
//! - artifact load failure (fatal at Predictor construction),
//! - inference failure (recovered at the `predict` boundary).

use std::fmt;

/// Classifier artifact (model file or feature-name sidecar) could not be
/// loaded. Construction-time only; a `Predictor` that failed to construct
/// does not exist, so no prediction can run against a broken artifact.
#[derive(Debug)]
pub enum ArtifactError {
    /// Model or sidecar file missing on disk.
    NotFound(String),
    /// File exists but is not a usable artifact.
    Invalid(String),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::NotFound(path) => write!(f, "artifact not found: {}", path),
            ArtifactError::Invalid(detail) => write!(f, "invalid artifact: {}", detail),
        }
    }
}

impl std::error::Error for ArtifactError {}

/// Failure while binding a feature vector or invoking the classifier.
/// Recovered at the `predict` boundary into an error-status result.
#[derive(Debug)]
pub struct InferenceError(pub String);

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

impl From<ndarray::ShapeError> for InferenceError {
    fn from(e: ndarray::ShapeError) -> Self {
        InferenceError(format!("tensor shape error: {}", e))
    }
}
