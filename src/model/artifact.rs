//! Artifact Loading
//!
//! One-time startup load of the classifier artifact: the ONNX model plus an
//! optional JSON sidecar holding the ordered feature-name list used at
//! training time. Both are produced offline by the training collaborator and
//! consumed read-only here.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;
use crate::features::layout::FEATURE_COUNT;
use super::classifier::OnnxClassifier;

/// Load-time record of what was loaded and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub model_path: String,
    pub feature_count: usize,
    pub has_feature_names: bool,
    pub loaded_at: DateTime<Utc>,
}

/// A loaded classifier artifact: model session plus optional trained
/// feature order.
#[derive(Debug)]
pub struct ModelArtifact {
    pub classifier: OnnxClassifier,
    pub feature_names: Option<Vec<String>>,
    pub metadata: ArtifactMetadata,
}

impl ModelArtifact {
    /// Load the model and, when given, its feature-name sidecar.
    ///
    /// Fails fast: a missing or corrupt file is an [`ArtifactError`] and no
    /// artifact exists afterwards. A sidecar whose length differs from the
    /// schema is kept (the model may genuinely use fewer columns) but logged.
    pub fn load(
        model_path: impl AsRef<Path>,
        feature_names_path: Option<&Path>,
    ) -> Result<Self, ArtifactError> {
        let model_path = model_path.as_ref();
        let classifier = OnnxClassifier::load(&model_path.to_string_lossy())?;

        let feature_names = match feature_names_path {
            Some(path) => Some(load_feature_names(path)?),
            None => None,
        };

        let metadata = ArtifactMetadata {
            model_path: model_path.to_string_lossy().into_owned(),
            feature_count: FEATURE_COUNT,
            has_feature_names: feature_names.is_some(),
            loaded_at: Utc::now(),
        };

        Ok(Self {
            classifier,
            feature_names,
            metadata,
        })
    }
}

/// Read the sidecar: a JSON array of feature names in trained order.
fn load_feature_names(path: &Path) -> Result<Vec<String>, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_string_lossy().into_owned()));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| ArtifactError::Invalid(format!("read feature names: {}", e)))?;
    let names: Vec<String> = serde_json::from_str(&raw)
        .map_err(|e| ArtifactError::Invalid(format!("parse feature names: {}", e)))?;

    if names.is_empty() {
        return Err(ArtifactError::Invalid(
            "feature-name list is empty".to_string(),
        ));
    }
    if names.len() != FEATURE_COUNT {
        log::warn!(
            "feature-name list has {} entries, schema has {}",
            names.len(),
            FEATURE_COUNT
        );
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_feature_names_missing() {
        let err = load_feature_names(Path::new("/nonexistent/names.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(_)));
    }

    #[test]
    fn test_load_feature_names_valid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["num_dots", "url_length"]"#).unwrap();

        let names = load_feature_names(file.path()).unwrap();
        assert_eq!(names, vec!["num_dots".to_string(), "url_length".to_string()]);
    }

    #[test]
    fn test_load_feature_names_corrupt() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = load_feature_names(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)));
    }

    #[test]
    fn test_load_feature_names_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = load_feature_names(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)));
    }

    #[test]
    fn test_artifact_load_missing_model() {
        let err = ModelArtifact::load("/nonexistent/model.onnx", None).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(_)));
    }
}
