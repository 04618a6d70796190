//! Feature Layout - Centralized Feature Schema
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! The order here is load-bearing: the shipped classifier was trained against
//! columns in exactly this order. Slots marked "placeholder" are declared in
//! the schema but populated by no extraction rule; they stay 0, and the
//! trained artifact saw zeros in those columns too.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in the vector.
/// This is the SINGLE SOURCE OF TRUTH for the feature schema.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Character counts over the raw URL (0-12) ===
    "num_dots",              // 0
    "num_hyphens",           // 1
    "num_underscores",       // 2
    "num_percent",           // 3
    "num_slashes",           // 4
    "num_equal_signs",       // 5
    "num_semicolons",        // 6
    "num_ampersands",        // 7
    "num_exclamations",      // 8
    "num_spaces",            // 9
    "num_www",               // 10: substring count, "wwww" counts once
    "num_com",               // 11: substring count, "company" counts
    "num_dollar_signs",      // 12: placeholder, always 0

    // === Extended lexical slots (13-20), placeholders ===
    "num_plus_signs",        // 13
    "num_asterisks",         // 14
    "num_hashtags",          // 15
    "num_colons",            // 16
    "num_commas",            // 17
    "num_question_marks",    // 18
    "num_brackets",          // 19
    "num_parentheses",       // 20

    // === Encoding / structure slots (21-30), placeholders ===
    "has_unicode",           // 21
    "has_punycode",          // 22
    "has_data_uri",          // 23
    "has_file_extension",    // 24
    "has_brand_name",        // 25
    "has_sensitive_terms",   // 26
    "has_numeric_chars",     // 27
    "has_mixed_chars",       // 28
    "protocol_count",        // 29
    "subdomain_depth",       // 30

    // === Depth / entropy slots (31-36), placeholders ===
    "path_depth",            // 31
    "url_entropy",           // 32
    "domain_entropy",        // 33
    "path_entropy",          // 34
    "query_entropy",         // 35
    "fragment_entropy",      // 36

    // === Lengths (37-41) ===
    "url_length",            // 37
    "domain_length",         // 38
    "path_length",           // 39
    "query_length",          // 40
    "fragment_length",       // 41

    // === Token statistics (42-45) ===
    "avg_domain_token_length", // 42
    "max_domain_token_length", // 43
    "avg_path_token_length",   // 44
    "max_path_token_length",   // 45

    // === Security heuristics (46-51) ===
    "suspicious_tld_count",    // 46
    "suspicious_words_count",  // 47
    "has_ip_address",          // 48
    "has_at_symbol",           // 49
    "has_double_slash",        // 50
    "has_suspicious_port",     // 51

    // === Token count (52) ===
    "domain_token_count",      // 52
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 53;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout.
/// Used to detect layout mismatches at runtime.
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a feature vector's layout doesn't match the current schema
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version,
            self.expected_hash,
            self.actual_version,
            self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that incoming data matches the current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================
