//! Central Lexical Lists
//!
//! Single source of truth for the fixed suspicious-TLD, suspicious-keyword
//! and legitimate-domain lists. These were frozen when the shipped model was
//! trained; editing them changes the feature distribution the classifier
//! sees, so treat them as part of the model contract.

/// TLDs disproportionately used by phishing campaigns.
/// `suspicious_tld_count` sums `domain.ends_with(tld)` over this list.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".gq", ".xyz", ".top", ".work", ".date",
    ".bid", ".download", ".loan", ".racing", ".win", ".link", ".click",
    ".party", ".gdn", ".stream", ".review", ".trade", ".accountant",
    ".science", ".faith", ".webcam", ".pw", ".tech", ".cc", ".rest",
    ".su", ".ru", ".info", ".online", ".site", ".website", ".space",
];

/// Keywords common in credential-harvesting and lure URLs.
/// Matched as substrings of the lowercased full URL.
pub const SUSPICIOUS_WORDS: &[&str] = &[
    "login", "signin", "verify", "secure", "account", "banking",
    "password", "credential", "confirm", "update", "paypal", "amazon",
    "apple", "microsoft", "google", "facebook", "instagram", "security",
    "authenticate", "wallet", "verification", "suspended", "unusual",
    "activity", "limited", "access", "validate", "unauthorized",
    "watch", "movie", "stream", "download", "free", "premium",
];

/// Well-known domains used by the trust heuristics.
pub const LEGITIMATE_DOMAINS: &[&str] = &[
    "google.com", "facebook.com", "amazon.com", "microsoft.com",
    "apple.com", "netflix.com", "youtube.com", "twitter.com",
    "linkedin.com", "instagram.com", "github.com", "spotify.com",
    "wikipedia.org", "reddit.com", "yahoo.com", "ebay.com",
    "abc.com", "cnn.com", "bbc.com", "nytimes.com",
];

/// Common typo-squats of well-known brands, mapped to the brand they imitate.
pub const COMMON_TYPOS: &[(&str, &str)] = &[
    ("gogle", "google"),
    ("facebok", "facebook"),
    ("amazn", "amazon"),
    ("microsft", "microsoft"),
    ("appl", "apple"),
    ("yutube", "youtube"),
    ("twiter", "twitter"),
    ("linkdin", "linkedin"),
    ("instagrm", "instagram"),
    ("githb", "github"),
    ("spotfy", "spotify"),
    ("wikipdia", "wikipedia"),
    ("redit", "reddit"),
    ("yahooo", "yahoo"),
    ("ebayy", "ebay"),
    ("abcc", "abc"),
    ("cnnn", "cnn"),
    ("bbcc", "bbc"),
    ("nytimess", "nytimes"),
];

/// Terms that make a subdomain, path, query or fragment look like a
/// credential-entry flow.
pub const SENSITIVE_COMPONENT_TERMS: &[&str] = &[
    "login", "signin", "verify", "secure", "account", "banking", "password",
];

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes_frozen() {
        // The trained artifact assumes these exact list sizes.
        assert_eq!(SUSPICIOUS_TLDS.len(), 36);
        assert_eq!(SUSPICIOUS_WORDS.len(), 34);
        assert_eq!(LEGITIMATE_DOMAINS.len(), 20);
    }

    #[test]
    fn test_tlds_start_with_dot() {
        for tld in SUSPICIOUS_TLDS {
            assert!(tld.starts_with('.'), "{tld} must start with a dot");
        }
    }

    #[test]
    fn test_suspicious_words_lowercase() {
        for word in SUSPICIOUS_WORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
