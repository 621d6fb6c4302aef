//! Attribution Rules & Weights
//!
//! All fixed tables behind identification, scoring, and tier
//! assignment. NO evaluation logic here - only constants.
//!
//! The weighting coefficients are a compatibility contract: downstream
//! reporting depends on the exact values, so change nothing here
//! without versioning the output.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::RiskTier;

// ============================================================================
// URL / CONTEXT PATTERN RULES (identifier)
// ============================================================================

/// URL substrings indicating executable delivery
pub const DELIVERY_PATTERNS: &[&str] = &["download", "exe", "bin", "dll"];
/// Ingress Tool Transfer, Shared Modules
pub const DELIVERY_TECHNIQUES: &[&str] = &["T1105", "T1129"];

/// URL substrings indicating credential harvesting
pub const CREDENTIAL_PATTERNS: &[&str] = &["phish", "login", "signin"];
/// Phishing, User Execution: Malicious Link
pub const CREDENTIAL_TECHNIQUES: &[&str] = &["T1566", "T1204.001"];

/// Exploit Public-Facing Application, External Remote Services
pub const HIGH_TIER_TECHNIQUES: &[&str] = &["T1190", "T1133"];
/// Web Protocols, Web Service
pub const MEDIUM_TIER_TECHNIQUES: &[&str] = &["T1071.001", "T1102"];

/// Positive-detector count above which capability techniques apply
pub const CAPABILITY_POSITIVES_THRESHOLD: u32 = 10;
/// Develop Capabilities, Obtain Capabilities
pub const CAPABILITY_TECHNIQUES: &[&str] = &["T1587", "T1588"];

/// URL substrings indicating coin mining
pub const MINING_PATTERNS: &[&str] = &["crypto", "miner"];
/// Resource Hijacking, Web Protocols
pub const MINING_TECHNIQUES: &[&str] = &["T1496", "T1071.001"];

// ============================================================================
// SCORER TABLES
// ============================================================================

/// Runtime base severity per technique id.
///
/// Deliberately independent from the catalog's build-time severity
/// field; this table, not the catalog, drives the composite score.
pub static BASE_SEVERITY: Lazy<HashMap<&'static str, f32>> = Lazy::new(|| {
    HashMap::from([
        ("T1190", 85.0),     // Exploit Public-Facing Application
        ("T1133", 75.0),     // External Remote Services
        ("T1566", 80.0),     // Phishing
        ("T1105", 70.0),     // Ingress Tool Transfer
        ("T1496", 65.0),     // Resource Hijacking
        ("T1071.001", 55.0), // Web Protocols
        ("T1102", 50.0),     // Web Service
        ("T1129", 60.0),     // Shared Modules
        ("T1587", 75.0),     // Develop Capabilities
        ("T1588", 70.0),     // Obtain Capabilities
        ("T1204.001", 75.0), // User Execution: Malicious Link
    ])
});

/// Base severity for ids missing from the table
pub const DEFAULT_BASE_SEVERITY: f32 = 50.0;

/// Weight per kill-chain phase, keyed by the hyphenated STIX phase name.
pub static PHASE_WEIGHTS: Lazy<HashMap<&'static str, f32>> = Lazy::new(|| {
    HashMap::from([
        ("initial-access", 1.0),
        ("execution", 0.9),
        ("persistence", 0.8),
        ("privilege-escalation", 0.9),
        ("defense-evasion", 0.8),
        ("credential-access", 0.9),
        ("discovery", 0.6),
        ("lateral-movement", 0.8),
        ("collection", 0.7),
        ("command-and-control", 0.9),
        ("exfiltration", 0.8),
        ("impact", 1.0),
    ])
});

/// Multiplier for unrecognized phases and for techniques without
/// resolvable tactics
pub const DEFAULT_PHASE_WEIGHT: f32 = 0.5;

/// Total kill-chain phases, the coverage denominator
pub const TOTAL_KILL_CHAIN_PHASES: usize = 12;

// ============================================================================
// COMPOSITE WEIGHTS (must sum to 1.0)
// ============================================================================

/// Technique severity is weighted highest
pub const SEVERITY_WEIGHT: f32 = 0.4;
/// Attack-chain coverage second
pub const COVERAGE_WEIGHT: f32 = 0.3;
/// Detectability third
pub const DETECTION_WEIGHT: f32 = 0.2;
/// Mitigation availability least
pub const MITIGATION_WEIGHT: f32 = 0.1;

// ============================================================================
// TIER BANDS (categorizer)
// ============================================================================

/// Ordered `(exclusive upper bound %, tier, action)` bands, evaluated
/// top to bottom, first match wins. Percentages at a bound land in the
/// next band up.
pub const TIER_BANDS: &[(f32, RiskTier, &str)] = &[
    (3.0, RiskTier::Low, "No immediate action required"),
    (10.0, RiskTier::Medium, "Consider manual review"),
    (20.0, RiskTier::High, "Immediate action required!"),
];

/// Action when no band matched (at or above the last bound)
pub const CRITICAL_ACTION: &str = "Block immediately and escalate to incident response";

/// Action when the detector total is zero
pub const UNKNOWN_ACTION: &str = "Could not determine risk - manual review required";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_weights_sum_to_one() {
        let sum = SEVERITY_WEIGHT + COVERAGE_WEIGHT + DETECTION_WEIGHT + MITIGATION_WEIGHT;
        assert!((sum - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tables_complete() {
        assert_eq!(BASE_SEVERITY.len(), 11);
        assert_eq!(PHASE_WEIGHTS.len(), TOTAL_KILL_CHAIN_PHASES);
        assert!(PHASE_WEIGHTS.values().all(|w| (0.5..=1.0).contains(w)));
    }

    #[test]
    fn test_bands_ascending() {
        let bounds: Vec<f32> = TIER_BANDS.iter().map(|(b, _, _)| *b).collect();
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
    }
}
