//! Prediction Boundary
//!
//! Ties extraction and classification together behind one contract:
//! `predict(url)` always returns a structured [`PredictionResult`] and never
//! raises. Inference failures (shape mismatch, classifier rejection) are
//! folded into an error-status result at this boundary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, InferenceError};
use crate::features::{extract_features, FeatureVector};
use super::artifact::{ArtifactMetadata, ModelArtifact};
use super::classifier::Classifier;

/// Outcome discriminator; callers must check this before reading the
/// verdict fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Success,
    Error,
}

/// Per-call result. `is_phishing` and `confidence` are only present on
/// success; on error they are both `None` and `error` carries the detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub is_phishing: Option<bool>,
    pub confidence: Option<f32>,
    pub status: PredictionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    pub fn success(is_phishing: bool, confidence: f32) -> Self {
        Self {
            is_phishing: Some(is_phishing),
            confidence: Some(confidence),
            status: PredictionStatus::Success,
            error: None,
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            is_phishing: None,
            confidence: None,
            status: PredictionStatus::Error,
            error: Some(detail.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PredictionStatus::Success
    }
}

/// Wraps a classifier with the extraction pipeline and the trained feature
/// order. Immutable after construction; `predict` is a pure query, so one
/// instance can be shared across threads for batch fan-out.
pub struct Predictor {
    classifier: Box<dyn Classifier + Send + Sync>,
    feature_names: Option<Vec<String>>,
    metadata: Option<ArtifactMetadata>,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("feature_names", &self.feature_names)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl Predictor {
    /// Wrap any classifier, optionally with the trained feature order.
    pub fn new(
        classifier: Box<dyn Classifier + Send + Sync>,
        feature_names: Option<Vec<String>>,
    ) -> Self {
        Self {
            classifier,
            feature_names,
            metadata: None,
        }
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            classifier: Box::new(artifact.classifier),
            feature_names: artifact.feature_names,
            metadata: Some(artifact.metadata),
        }
    }

    /// Load the artifact files and construct in one step.
    pub fn from_files(
        model_path: impl AsRef<Path>,
        feature_names_path: Option<&Path>,
    ) -> Result<Self, ArtifactError> {
        ModelArtifact::load(model_path, feature_names_path).map(Self::from_artifact)
    }

    pub fn metadata(&self) -> Option<&ArtifactMetadata> {
        self.metadata.as_ref()
    }

    /// Classify one URL. Never raises: extraction is total, and any failure
    /// from binding or the classifier comes back as an error-status result.
    pub fn predict(&self, url: &str) -> PredictionResult {
        let vector = extract_features(url);

        match self.infer(&vector) {
            Ok((is_phishing, confidence)) => {
                log::debug!(
                    "predicted url ({} bytes): phishing={} confidence={:.3}",
                    url.len(),
                    is_phishing,
                    confidence
                );
                PredictionResult::success(is_phishing, confidence)
            }
            Err(e) => {
                log::debug!("prediction failed: {}", e);
                PredictionResult::failure(e.to_string())
            }
        }
    }

    fn infer(&self, vector: &FeatureVector) -> Result<(bool, f32), InferenceError> {
        // Bind values to the trained order when one was loaded; this is the
        // guard against column drift between training and inference. Names
        // outside the schema bind 0.
        let bound: Vec<f32> = match &self.feature_names {
            Some(names) => names
                .iter()
                .map(|name| vector.get_by_name(name).unwrap_or(0.0))
                .collect(),
            None => vector.as_slice().to_vec(),
        };

        let label = self.classifier.predict_label(&bound)?;
        let probabilities = self.classifier.class_probabilities(&bound)?;
        let confidence = predicted_class_probability(label, &probabilities)?;

        Ok((label, confidence))
    }
}

/// Probability of the predicted class: direct lookup for binary outputs,
/// maximum otherwise.
fn predicted_class_probability(
    label: bool,
    probabilities: &[f32],
) -> Result<f32, InferenceError> {
    if probabilities.is_empty() {
        return Err(InferenceError(
            "classifier returned no class probabilities".to_string(),
        ));
    }

    if probabilities.len() == 2 {
        Ok(probabilities[label as usize])
    } else {
        Ok(probabilities.iter().copied().fold(f32::MIN, f32::max))
    }
}
