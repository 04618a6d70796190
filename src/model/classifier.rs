//! Classifier Seam - ONNX Runtime Integration
//!
//! The classifier is an opaque capability behind the [`Classifier`] trait:
//! anything that can label a feature slice and estimate per-class
//! probabilities is substitutable. [`OnnxClassifier`] wraps an ONNX Runtime
//! session; [`HeuristicClassifier`] is a model-free fallback built from the
//! security feature slots.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::error::{ArtifactError, InferenceError};
use crate::features::layout::feature_index;

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Label + probability contract every concrete model must satisfy.
///
/// `features` is the bound feature slice for one URL: schema order, or the
/// artifact's trained order when a feature-name list was loaded.
pub trait Classifier {
    /// Predicted label: true = phishing.
    fn predict_label(&self, features: &[f32]) -> Result<bool, InferenceError>;

    /// Per-class probability estimates for the same input.
    fn class_probabilities(&self, features: &[f32]) -> Result<Vec<f32>, InferenceError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Pre-trained classifier loaded from an ONNX export.
///
/// Expects the training collaborator's layout: a label output first (int or
/// float tensor) and a per-class probability output second. A probability-only
/// export also works; the label then falls out of the probability argmax.
pub struct OnnxClassifier {
    // ort runs take exclusive access; callers keep `&self`.
    session: Mutex<Session>,
    output_names: Vec<String>,
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("output_names", &self.output_names)
            .finish_non_exhaustive()
    }
}

impl OnnxClassifier {
    /// Load a model file. Fails fast on a missing or structurally invalid
    /// artifact.
    pub fn load(model_path: &str) -> Result<Self, ArtifactError> {
        log::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(ArtifactError::NotFound(model_path.to_string()));
        }

        let session = Session::builder()
            .map_err(|e| ArtifactError::Invalid(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ArtifactError::Invalid(format!("optimization level: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ArtifactError::Invalid(format!("load model: {}", e)))?;

        Self::from_session(session)
    }

    /// Load a model from in-memory bytes.
    pub fn load_from_bytes(model_bytes: &[u8]) -> Result<Self, ArtifactError> {
        log::info!("Loading ONNX model from memory ({} bytes)", model_bytes.len());

        let session = Session::builder()
            .map_err(|e| ArtifactError::Invalid(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ArtifactError::Invalid(format!("optimization level: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| ArtifactError::Invalid(format!("load model: {}", e)))?;

        Self::from_session(session)
    }

    fn from_session(session: Session) -> Result<Self, ArtifactError> {
        let output_names: Vec<String> =
            session.outputs().iter().map(|o| o.name().to_string()).collect();
        if output_names.is_empty() {
            return Err(ArtifactError::Invalid("model defines no outputs".to_string()));
        }

        log::info!("ONNX model loaded, outputs: {:?}", output_names);
        Ok(Self {
            session: Mutex::new(session),
            output_names,
        })
    }

    /// One session run: decode label and probabilities together.
    fn run(&self, features: &[f32]) -> Result<(bool, Vec<f32>), InferenceError> {
        let input = Array2::<f32>::from_shape_vec((1, features.len()), features.to_vec())?;
        let input_tensor = Value::from_array(input)
            .map_err(|e| InferenceError(format!("input tensor: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("inference failed: {}", e)))?;

        let first = outputs
            .get(&self.output_names[0])
            .ok_or_else(|| InferenceError("missing label output".to_string()))?;

        match self.output_names.get(1) {
            Some(prob_name) => {
                let label = extract_label(first)?;
                let prob_output = outputs
                    .get(prob_name)
                    .ok_or_else(|| InferenceError("missing probability output".to_string()))?;
                let probabilities = extract_probabilities(prob_output)?;
                Ok((label, probabilities))
            }
            // Probability-only export: label is the argmax.
            None => {
                let probabilities = extract_probabilities(first)?;
                let label = argmax(&probabilities)? != 0;
                Ok((label, probabilities))
            }
        }
    }
}

impl Classifier for OnnxClassifier {
    fn predict_label(&self, features: &[f32]) -> Result<bool, InferenceError> {
        self.run(features).map(|(label, _)| label)
    }

    fn class_probabilities(&self, features: &[f32]) -> Result<Vec<f32>, InferenceError> {
        self.run(features).map(|(_, probabilities)| probabilities)
    }
}

/// Decode the label tensor; exports differ on the element type.
fn extract_label(value: &Value) -> Result<bool, InferenceError> {
    if let Ok((_, data)) = value.try_extract_tensor::<i64>() {
        return first_nonempty(data).map(|v| v != 0);
    }
    if let Ok((_, data)) = value.try_extract_tensor::<i32>() {
        return first_nonempty(data).map(|v| v != 0);
    }
    if let Ok((_, data)) = value.try_extract_tensor::<f32>() {
        return first_nonempty(data).map(|v| v != 0.0);
    }
    Err(InferenceError("label output has unsupported element type".to_string()))
}

fn extract_probabilities(value: &Value) -> Result<Vec<f32>, InferenceError> {
    let (_, data) = value
        .try_extract_tensor::<f32>()
        .map_err(|e| InferenceError(format!("probability output: {}", e)))?;
    if data.is_empty() {
        return Err(InferenceError("empty probability output".to_string()));
    }
    Ok(data.to_vec())
}

fn first_nonempty<T: Copy>(data: &[T]) -> Result<T, InferenceError> {
    data.first()
        .copied()
        .ok_or_else(|| InferenceError("empty label output".to_string()))
}

fn argmax(probabilities: &[f32]) -> Result<usize, InferenceError> {
    probabilities
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
        .ok_or_else(|| InferenceError("empty probability output".to_string()))
}

// ============================================================================
// HEURISTIC FALLBACK
// ============================================================================

/// Model-free classifier over the security feature slots.
///
/// Useful when no artifact is available (tooling, smoke tests); it reads the
/// schema-order slice directly, so it must not be combined with a reordering
/// feature-name list.
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    fn risk_score(features: &[f32]) -> f32 {
        let get = |name: &str| {
            feature_index(name)
                .and_then(|i| features.get(i))
                .copied()
                .unwrap_or(0.0)
        };

        let mut score = 0.0;
        score += get("suspicious_words_count") * 0.15;
        score += get("suspicious_tld_count") * 0.3;
        score += get("has_ip_address") * 0.3;
        score += get("has_at_symbol") * 0.2;
        score += get("has_double_slash") * 0.1;
        score += get("has_suspicious_port") * 0.1;
        if get("url_length") > 100.0 {
            score += 0.1;
        }

        score.min(1.0)
    }
}

impl Classifier for HeuristicClassifier {
    fn predict_label(&self, features: &[f32]) -> Result<bool, InferenceError> {
        Ok(Self::risk_score(features) > 0.5)
    }

    fn class_probabilities(&self, features: &[f32]) -> Result<Vec<f32>, InferenceError> {
        let p_phishing = Self::risk_score(features).clamp(0.05, 0.95);
        Ok(vec![1.0 - p_phishing, p_phishing])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract_features;

    #[test]
    fn test_onnx_load_missing_file() {
        let err = OnnxClassifier::load("/nonexistent/model.onnx").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(_)));
    }

    #[test]
    fn test_heuristic_flags_stacked_signals() {
        let vector =
            extract_features("http://192.168.0.1/secure-login-verify-account-update");
        let label = HeuristicClassifier::new()
            .predict_label(vector.as_slice())
            .unwrap();
        assert!(label);
    }

    #[test]
    fn test_heuristic_passes_benign_url() {
        let vector = extract_features("https://example.org/docs");
        let classifier = HeuristicClassifier::new();
        assert!(!classifier.predict_label(vector.as_slice()).unwrap());

        let probs = classifier.class_probabilities(vector.as_slice()).unwrap();
        assert_eq!(probs.len(), 2);
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-6);
        assert!(probs[0] > probs[1]);
    }

    #[test]
    fn test_heuristic_probabilities_bounded() {
        let vector = extract_features(
            "http://secure-login-verify.free-prize.xyz:8080//account@update",
        );
        let probs = HeuristicClassifier::new()
            .class_probabilities(vector.as_slice())
            .unwrap();
        assert!(probs[1] <= 0.95);
        assert!(probs[1] >= 0.05);
    }
}
