//! Advisory Trust Heuristics
//!
//! Coarse trust scores over the domain and the full URL. These never feed
//! the classifier's feature vector; they back the heuristic fallback
//! classifier and are available to callers that want a second opinion
//! alongside the model verdict.

use crate::constants::{
    COMMON_TYPOS, LEGITIMATE_DOMAINS, SENSITIVE_COMPONENT_TERMS, SUSPICIOUS_TLDS,
    SUSPICIOUS_WORDS,
};
use super::url_parts::UrlParts;

/// Domain hosts a well-known brand (substring match, lowercased).
pub fn is_legitimate_domain(domain: &str) -> bool {
    let domain_lower = domain.to_lowercase();
    LEGITIMATE_DOMAINS.iter().any(|d| domain_lower.contains(d))
}

/// Domain contains a known typo-squat of a major brand.
pub fn has_typo_squat(domain: &str) -> bool {
    let domain_lower = domain.to_lowercase();
    COMMON_TYPOS.iter().any(|(typo, _)| domain_lower.contains(typo))
}

/// Component (subdomain, path, query or fragment) mentions a credential-flow
/// term.
pub fn has_sensitive_term(component: &str) -> bool {
    let lower = component.to_lowercase();
    SENSITIVE_COMPONENT_TERMS.iter().any(|t| lower.contains(t))
}

/// Combined domain score: positive leans legitimate, negative leans phishy.
///
/// +3 known brand host, -2 suspicious TLD, -2 typo-squat, -1 sensitive
/// subdomain term.
pub fn domain_trust_score(domain: &str) -> f32 {
    let domain_lower = domain.to_lowercase();
    let mut score = 0.0;

    if is_legitimate_domain(domain) {
        score += 3.0;
    }
    if SUSPICIOUS_TLDS.iter().any(|tld| domain_lower.ends_with(tld)) {
        score -= 2.0;
    }
    if has_typo_squat(domain) {
        score -= 2.0;
    }
    if has_sensitive_term(domain) {
        score -= 1.0;
    }

    score
}

/// Whole-URL score: penalizes lure keywords, obfuscation characters and
/// excessive length. 0 is neutral; more negative is more suspicious.
pub fn url_trust_score(url: &str) -> f32 {
    let url_lower = url.to_lowercase();
    let mut score = 0.0;

    let word_hits = SUSPICIOUS_WORDS
        .iter()
        .filter(|w| url_lower.contains(*w))
        .count();
    score -= word_hits as f32;

    score -= url.chars().filter(|&c| c == '%').count() as f32 * 0.5;
    score -= url.chars().filter(|&c| c == '@').count() as f32;
    score -= url.matches("//").count() as f32 * 0.5;

    if url.chars().count() > 100 {
        score -= 1.0;
    }

    score
}

/// Combined advisory score for a URL and its parsed parts.
pub fn combined_trust_score(url: &str, parts: &UrlParts) -> f32 {
    domain_trust_score(&parts.domain) + url_trust_score(url)
}
