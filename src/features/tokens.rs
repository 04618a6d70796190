//! Token Statistics
//!
//! Domain tokens are the `.`-separated segments of the authority, empty
//! segments included (an empty domain yields one empty token, so the token
//! count is never 0 - the trained artifact saw that behavior). Path tokens
//! are the non-empty `/`-separated segments, so a path may well have none.

use super::url_parts::UrlParts;
use super::vector::{FeatureSignal, FeatureVector};

#[derive(Debug, Clone, Default)]
pub struct TokenSignals {
    pub domain_token_count: usize,
    pub avg_domain_token_length: f32,
    pub max_domain_token_length: usize,
    pub avg_path_token_length: f32,
    pub max_path_token_length: usize,
}

impl TokenSignals {
    pub fn new(parts: &UrlParts) -> Self {
        let domain_tokens: Vec<&str> = parts.domain.split('.').collect();
        let path_tokens: Vec<&str> = parts.path.split('/').filter(|t| !t.is_empty()).collect();

        let (avg_domain, max_domain) = token_stats(&domain_tokens);
        let (avg_path, max_path) = token_stats(&path_tokens);

        Self {
            domain_token_count: domain_tokens.len(),
            avg_domain_token_length: avg_domain,
            max_domain_token_length: max_domain,
            avg_path_token_length: avg_path,
            max_path_token_length: max_path,
        }
    }
}

/// (average, max) character length over tokens; (0, 0) when there are none.
fn token_stats(tokens: &[&str]) -> (f32, usize) {
    if tokens.is_empty() {
        return (0.0, 0);
    }
    let lengths: Vec<usize> = tokens.iter().map(|t| t.chars().count()).collect();
    let total: usize = lengths.iter().sum();
    let max = lengths.iter().copied().max().unwrap_or(0);
    (total as f32 / tokens.len() as f32, max)
}

impl FeatureSignal for TokenSignals {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("domain_token_count", self.domain_token_count as f32);
        vector.set_by_name("avg_domain_token_length", self.avg_domain_token_length);
        vector.set_by_name("max_domain_token_length", self.max_domain_token_length as f32);
        vector.set_by_name("avg_path_token_length", self.avg_path_token_length);
        vector.set_by_name("max_path_token_length", self.max_path_token_length as f32);
    }
}
