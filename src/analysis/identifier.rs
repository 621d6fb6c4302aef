//! Technique Identifier
//!
//! Pure rule evaluation: maps a scan context (URL, positives count,
//! declared tier) to the set of candidate technique ids. No I/O, no
//! hidden state, no randomness - identical input yields identical
//! output.
//!
//! All rules are additive; a context matching nothing yields the empty
//! set, which is a valid outcome, not an error.

use std::collections::BTreeSet;

use super::rules;
use super::types::{RiskTier, ScanContext};

/// Identify candidate techniques for a scan context.
///
/// The returned set only ever contains ids from the fixed rule tables
/// in `rules` - nothing is fabricated at runtime.
pub fn identify(context: &ScanContext) -> BTreeSet<&'static str> {
    let mut techniques = BTreeSet::new();
    let url = context.url.to_lowercase();

    if rules::DELIVERY_PATTERNS.iter().any(|p| url.contains(p)) {
        techniques.extend(rules::DELIVERY_TECHNIQUES.iter().copied());
    }

    if rules::CREDENTIAL_PATTERNS.iter().any(|p| url.contains(p)) {
        techniques.extend(rules::CREDENTIAL_TECHNIQUES.iter().copied());
    }

    match context.risk_tier {
        RiskTier::High => techniques.extend(rules::HIGH_TIER_TECHNIQUES.iter().copied()),
        RiskTier::Medium => techniques.extend(rules::MEDIUM_TIER_TECHNIQUES.iter().copied()),
        _ => {}
    }

    if context.positives > rules::CAPABILITY_POSITIVES_THRESHOLD {
        techniques.extend(rules::CAPABILITY_TECHNIQUES.iter().copied());
    }

    if rules::MINING_PATTERNS.iter().any(|p| url.contains(p)) {
        techniques.extend(rules::MINING_TECHNIQUES.iter().copied());
    }

    techniques
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_yields_empty_set() {
        let context = ScanContext::new("", 0, RiskTier::Unknown);
        assert!(identify(&context).is_empty());

        let benign = ScanContext::new("https://example.org/about", 0, RiskTier::Low);
        assert!(identify(&benign).is_empty());
    }

    #[test]
    fn test_delivery_patterns() {
        let context = ScanContext::new("https://cdn.evil.test/setup.DLL", 0, RiskTier::Low);
        let ids = identify(&context);
        assert_eq!(ids, BTreeSet::from(["T1105", "T1129"]));
    }

    #[test]
    fn test_credential_patterns() {
        let context = ScanContext::new("https://secure-signin.test/account", 0, RiskTier::Low);
        let ids = identify(&context);
        assert_eq!(ids, BTreeSet::from(["T1204.001", "T1566"]));
    }

    #[test]
    fn test_tier_rules() {
        let high = ScanContext::new("https://example.org", 0, RiskTier::High);
        assert_eq!(identify(&high), BTreeSet::from(["T1133", "T1190"]));

        let medium = ScanContext::new("https://example.org", 0, RiskTier::Medium);
        assert_eq!(identify(&medium), BTreeSet::from(["T1071.001", "T1102"]));

        // Critical carries no tier rule of its own
        let critical = ScanContext::new("https://example.org", 0, RiskTier::Critical);
        assert!(identify(&critical).is_empty());
    }

    #[test]
    fn test_positives_threshold_is_exclusive() {
        let at = ScanContext::new("https://example.org", 10, RiskTier::Low);
        assert!(identify(&at).is_empty());

        let above = ScanContext::new("https://example.org", 11, RiskTier::Low);
        assert_eq!(identify(&above), BTreeSet::from(["T1587", "T1588"]));
    }

    #[test]
    fn test_mining_overlap_deduplicates() {
        // MEDIUM tier and the miner pattern both contribute T1071.001
        let context = ScanContext::new("http://pool.cryptominer.test", 0, RiskTier::Medium);
        let ids = identify(&context);
        assert_eq!(ids, BTreeSet::from(["T1071.001", "T1102", "T1496"]));
    }

    #[test]
    fn test_worked_example_union() {
        let context = ScanContext::new("http://malicious-download.exe", 12, RiskTier::High);
        let ids = identify(&context);
        assert_eq!(
            ids,
            BTreeSet::from(["T1105", "T1129", "T1133", "T1190", "T1587", "T1588"])
        );
    }

    #[test]
    fn test_idempotent() {
        let context = ScanContext::new("http://malicious-download.exe", 12, RiskTier::High);
        assert_eq!(identify(&context), identify(&context));
    }
}
