//! Length Signals
//!
//! Character lengths of the full URL and of each parsed component. Lengths
//! are counted in characters, not bytes, so multi-byte input doesn't inflate
//! the signal.

use super::url_parts::UrlParts;
use super::vector::{FeatureSignal, FeatureVector};

#[derive(Debug, Clone, Default)]
pub struct LengthSignals {
    pub url_length: usize,
    pub domain_length: usize,
    pub path_length: usize,
    pub query_length: usize,
    pub fragment_length: usize,
}

impl LengthSignals {
    pub fn new(url: &str, parts: &UrlParts) -> Self {
        Self {
            url_length: url.chars().count(),
            domain_length: parts.domain.chars().count(),
            path_length: parts.path.chars().count(),
            query_length: parts.query.chars().count(),
            fragment_length: parts.fragment.chars().count(),
        }
    }
}

impl FeatureSignal for LengthSignals {
    fn apply(&self, vector: &mut FeatureVector) {
        vector.set_by_name("url_length", self.url_length as f32);
        vector.set_by_name("domain_length", self.domain_length as f32);
        vector.set_by_name("path_length", self.path_length as f32);
        vector.set_by_name("query_length", self.query_length as f32);
        vector.set_by_name("fragment_length", self.fragment_length as f32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_lengths() {
        let url = "http://a.bb.ccc/x/yy?q=1#frag";
        let parts = UrlParts::parse(url);
        let lengths = LengthSignals::new(url, &parts);

        assert_eq!(lengths.url_length, url.len());
        assert_eq!(lengths.domain_length, 8);
        assert_eq!(lengths.path_length, 5);
        assert_eq!(lengths.query_length, 3);
        assert_eq!(lengths.fragment_length, 4);
    }

    #[test]
    fn test_empty_url() {
        let parts = UrlParts::parse("");
        let lengths = LengthSignals::new("", &parts);
        assert_eq!(lengths.url_length, 0);
        assert_eq!(lengths.domain_length, 0);
    }
}
