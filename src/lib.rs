//! PhishGuard Core - URL Feature Extraction & Classification
//!
//! Classifies a candidate URL as phishing or benign:
//! - **Feature extraction**: deterministic, pure mapping from a raw URL string
//!   to a fixed-order 53-slot numeric vector (see [`features::layout`]).
//! - **Prediction**: a pre-trained classifier artifact wrapped behind the
//!   [`model::Classifier`] seam, exposed as `predict(url) -> PredictionResult`.
//!
//! The core performs no network I/O and never trains or mutates the model.
//! Extraction is total (malformed URLs degrade to empty components), and
//! `predict` always returns a structured result instead of raising.

pub mod constants;
pub mod error;
pub mod features;
pub mod model;

pub use error::{ArtifactError, InferenceError};
pub use features::layout::{FEATURE_COUNT, FEATURE_LAYOUT, LayoutMismatchError};
pub use features::vector::FeatureVector;
pub use features::extract_features;
pub use model::classifier::{Classifier, HeuristicClassifier, OnnxClassifier};
pub use model::predictor::{PredictionResult, PredictionStatus, Predictor};
