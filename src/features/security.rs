//! Security Heuristic Signals
//!
//! Small counts and 0/1 flags over the URL and its parsed parts. Two known
//! loosenesses are deliberate and frozen into the trained artifact:
//! - the IP-literal check only counts digits per group, so 999.999.999.999
//!   still flags as an IP;
//! - the suspicious-port check fires on any `:` followed by 4-5 digits, even
//!   outside the authority.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{SUSPICIOUS_TLDS, SUSPICIOUS_WORDS};
use super::url_parts::UrlParts;
use super::vector::{FeatureSignal, FeatureVector};

/// Four dot-separated 1-3 digit groups, the whole domain.
static IP_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap());

/// Candidate port sequences; matches are discarded when the next character
/// is another digit (6+ digit runs are not ports).
static PORT_CANDIDATE: Lazy<Regex> = Lazy::new(|| Regex::new(r":\d{4,5}").unwrap());

#[derive(Debug, Clone, Default)]
pub struct SecuritySignals {
    pub suspicious_tld_count: u32,
    pub suspicious_words_count: u32,
    pub has_ip_address: bool,
    pub has_at_symbol: bool,
    pub has_double_slash: bool,
    pub has_suspicious_port: bool,
}

impl SecuritySignals {
    pub fn new(url: &str, parts: &UrlParts) -> Self {
        let url_lower = url.to_lowercase();

        // Sum, not flag: a pathological domain can end with several entries.
        let suspicious_tld_count = SUSPICIOUS_TLDS
            .iter()
            .filter(|tld| parts.domain.ends_with(*tld))
            .count() as u32;

        let suspicious_words_count = SUSPICIOUS_WORDS
            .iter()
            .filter(|word| url_lower.contains(*word))
            .count() as u32;

        Self {
            suspicious_tld_count,
            suspicious_words_count,
            has_ip_address: IP_LITERAL.is_match(&parts.domain),
            has_at_symbol: url.contains('@'),
            has_double_slash: parts.path.contains("//"),
            has_suspicious_port: has_suspicious_port(url),
        }
    }
}

/// `:` followed by exactly 4-5 digits anywhere in the URL.
fn has_suspicious_port(url: &str) -> bool {
    PORT_CANDIDATE.find_iter(url).any(|m| {
        !url[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    })
}

impl FeatureSignal for SecuritySignals {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("suspicious_tld_count", self.suspicious_tld_count as f32);
        vector.set_by_name("suspicious_words_count", self.suspicious_words_count as f32);
        vector.set_by_name("has_ip_address", self.has_ip_address as u8 as f32);
        vector.set_by_name("has_at_symbol", self.has_at_symbol as u8 as f32);
        vector.set_by_name("has_double_slash", self.has_double_slash as u8 as f32);
        vector.set_by_name("has_suspicious_port", self.has_suspicious_port as u8 as f32);
    }
}
