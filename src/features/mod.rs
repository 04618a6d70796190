//! Features Module - URL Feature Extraction
//!
//! Turns a raw URL string into the fixed-order numeric vector the classifier
//! consumes. Each stage computes one family of signals and writes them into
//! the shared vector by schema name; stages are pure and the whole pipeline
//! is deterministic with no I/O.

pub mod chars;
pub mod layout;
pub mod lengths;
pub mod security;
pub mod tokens;
pub mod trust;
pub mod url_parts;
pub mod vector;

#[cfg(test)]
mod tests;

pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use url_parts::UrlParts;
pub use vector::{FeatureSignal, FeatureVector};

use chars::CharCounts;
use lengths::LengthSignals;
use security::SecuritySignals;
use tokens::TokenSignals;

/// Extract the full feature vector for a URL.
///
/// Total function: malformed input degrades to empty components inside
/// [`UrlParts::parse`], so every call returns a schema-length vector. Schema
/// slots no stage computes (entropy, Unicode/punycode, brand-name and
/// structural-depth placeholders) stay 0.
pub fn extract_features(url: &str) -> FeatureVector {
    let parts = UrlParts::parse(url);

    let chars = CharCounts::from_url(url);
    let lengths = LengthSignals::new(url, &parts);
    let tokens = TokenSignals::new(&parts);
    let security = SecuritySignals::new(url, &parts);
    let stages: [&dyn FeatureSignal; 4] = [&chars, &lengths, &tokens, &security];

    let mut vector = FeatureVector::new();
    for stage in stages {
        stage.apply(&mut vector);
    }
    vector
}
