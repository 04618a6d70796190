//! Model Module - Classifier Artifact & Prediction
//!
//! Everything on the inference side of the pipeline: the classifier seam,
//! artifact loading, and the `predict(url)` boundary.

pub mod artifact;
pub mod classifier;
pub mod predictor;

pub use artifact::{ArtifactMetadata, ModelArtifact};
pub use classifier::{Classifier, HeuristicClassifier, OnnxClassifier};
pub use predictor::{PredictionResult, PredictionStatus, Predictor};
