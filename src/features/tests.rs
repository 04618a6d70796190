//! Integration tests for the extraction pipeline as a whole.

use super::{extract_features, FEATURE_COUNT};
use super::layout::feature_index;

fn value(url: &str, name: &str) -> f32 {
    extract_features(url)
        .get_by_name(name)
        .unwrap_or_else(|| panic!("{name} not in schema"))
}

#[test]
fn test_vector_is_schema_length_for_valid_urls() {
    for url in [
        "http://example.com",
        "https://secure-login.paypal.com.evil.tk/account?verify=1#now",
        "http://192.168.0.1:8080/admin",
    ] {
        let vector = extract_features(url);
        assert_eq!(vector.values.len(), FEATURE_COUNT);
        assert!(vector.is_compatible());
    }
}

#[test]
fn test_malformed_urls_still_produce_full_vectors() {
    for url in ["", "no scheme at all", "http://", "%%%zz", "a.b.c"] {
        let vector = extract_features(url);
        assert_eq!(vector.values.len(), FEATURE_COUNT);
        // Parse-dependent slots degrade to 0.
        if url.is_empty() {
            assert_eq!(vector.get_by_name("domain_length"), Some(0.0));
            assert_eq!(vector.get_by_name("url_length"), Some(0.0));
        }
    }
}

#[test]
fn test_character_counts_are_exact() {
    assert_eq!(value("a.b.c", "num_dots"), 2.0);
    assert_eq!(value("a.b.c", "num_slashes"), 0.0);
    assert_eq!(value("http://x/?a=1&b=2", "num_equal_signs"), 2.0);
}

#[test]
fn test_token_features() {
    let vector = extract_features("http://a.bb.ccc/x/yy");
    assert_eq!(vector.get_by_name("domain_token_count"), Some(3.0));
    assert_eq!(vector.get_by_name("avg_domain_token_length"), Some(2.0));
    assert_eq!(vector.get_by_name("max_domain_token_length"), Some(3.0));
    assert_eq!(vector.get_by_name("avg_path_token_length"), Some(1.5));
    assert_eq!(vector.get_by_name("max_path_token_length"), Some(2.0));
}

#[test]
fn test_ip_literal_flag() {
    assert_eq!(value("http://192.168.0.1/path", "has_ip_address"), 1.0);
    assert_eq!(value("http://example.com/path", "has_ip_address"), 0.0);
}

#[test]
fn test_ip_literal_looseness_survives_parse_rejection() {
    // Hosts with out-of-range octets never reach the strict parser's
    // happy path, but the digit-count rule still applies to them.
    let vector = extract_features("http://999.999.999.999/path");
    assert_eq!(vector.get_by_name("has_ip_address"), Some(1.0));
    assert_eq!(vector.get_by_name("domain_length"), Some(15.0));
    assert_eq!(vector.get_by_name("domain_token_count"), Some(4.0));
}

#[test]
fn test_domain_is_raw_netloc() {
    // Userinfo stays in the domain component.
    let vector = extract_features("http://user@evil.com/");
    assert_eq!(vector.get_by_name("domain_length"), Some(13.0));

    // Host case is preserved, so an uppercase TLD does not match.
    let vector = extract_features("http://FREE-PRIZE.XYZ");
    assert_eq!(vector.get_by_name("suspicious_tld_count"), Some(0.0));

    // An explicit default port is not elided.
    let vector = extract_features("http://example.com:80/a");
    assert_eq!(vector.get_by_name("domain_length"), Some(14.0));
}

#[test]
fn test_suspicious_tld_count() {
    assert_eq!(value("http://free-prize.xyz", "suspicious_tld_count"), 1.0);
    assert_eq!(value("http://example.com", "suspicious_tld_count"), 0.0);
}

#[test]
fn test_placeholder_slots_stay_zero() {
    let vector =
        extract_features("https://login.example.xyz/watch?free=1&premium=yes#stream");
    for name in [
        "num_dollar_signs",
        "num_question_marks",
        "has_unicode",
        "has_punycode",
        "has_brand_name",
        "url_entropy",
        "subdomain_depth",
        "path_depth",
    ] {
        assert_eq!(vector.get_by_name(name), Some(0.0), "{name} must stay 0");
    }
}

#[test]
fn test_idempotence() {
    let url = "https://secure-login.example.tk/verify?account=1";
    assert_eq!(extract_features(url), extract_features(url));
}

#[test]
fn test_ordering_matches_schema() {
    let vector = extract_features("http://a.bb.ccc/x/yy");
    let idx = feature_index("domain_token_count").unwrap();
    assert_eq!(vector.values[idx], 3.0);
    let idx = feature_index("num_dots").unwrap();
    assert_eq!(vector.values[idx], 2.0);
}
