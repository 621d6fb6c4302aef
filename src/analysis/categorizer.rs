//! Risk Categorizer
//!
//! Maps a detector-positive ratio to an ordinal risk tier with a
//! recommended action. Bands are half-open: a percentage exactly at a
//! bound lands in the next tier up.

use super::rules::{CRITICAL_ACTION, TIER_BANDS, UNKNOWN_ACTION};
use super::types::{RiskTier, ScanOutcome};

/// Assign a tier and action from a positives/total detector ratio.
///
/// A zero total means no ratio exists: the tier is UNKNOWN and the
/// operator is asked for manual review.
pub fn categorize(positives: u32, total: u32) -> (RiskTier, String) {
    if total == 0 {
        return (RiskTier::Unknown, UNKNOWN_ACTION.to_string());
    }

    let percent = positives as f32 * 100.0 / total as f32;

    for (upper, tier, action) in TIER_BANDS {
        if percent < *upper {
            return (*tier, action.to_string());
        }
    }

    (RiskTier::Critical, CRITICAL_ACTION.to_string())
}

/// Assign a tier and action from a scan outcome. A failed lookup yields
/// the ERROR tier with the failure reason embedded in the action text.
pub fn categorize_outcome(outcome: &ScanOutcome) -> (RiskTier, String) {
    match outcome {
        ScanOutcome::Completed { positives, total } => categorize(*positives, *total),
        ScanOutcome::Failed { reason } => {
            (RiskTier::Error, format!("Analysis failed - {}", reason))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_is_unknown() {
        let (tier, action) = categorize(0, 0);
        assert_eq!(tier, RiskTier::Unknown);
        assert!(action.contains("manual review"));

        // Positives without a total are equally undecidable
        assert_eq!(categorize(5, 0).0, RiskTier::Unknown);
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(categorize(0, 100).0, RiskTier::Low);
        assert_eq!(categorize(2, 100).0, RiskTier::Low);
        assert_eq!(categorize(5, 100).0, RiskTier::Medium);
        assert_eq!(categorize(15, 100).0, RiskTier::High);
        assert_eq!(categorize(25, 100).0, RiskTier::Critical);
        assert_eq!(categorize(100, 100).0, RiskTier::Critical);
    }

    #[test]
    fn test_bounds_land_in_next_tier() {
        // Upper-exclusive bands: 3%, 10%, 20% belong to the higher tier
        assert_eq!(categorize(3, 100).0, RiskTier::Medium);
        assert_eq!(categorize(10, 100).0, RiskTier::High);
        assert_eq!(categorize(20, 100).0, RiskTier::Critical);
    }

    #[test]
    fn test_non_percent_totals() {
        // 2 of 70 engines = ~2.9% -> LOW; 3 of 70 = ~4.3% -> MEDIUM
        assert_eq!(categorize(2, 70).0, RiskTier::Low);
        assert_eq!(categorize(3, 70).0, RiskTier::Medium);
    }

    #[test]
    fn test_actions_match_tier() {
        let (_, low_action) = categorize(1, 100);
        assert_eq!(low_action, "No immediate action required");

        let (_, high_action) = categorize(15, 100);
        assert_eq!(high_action, "Immediate action required!");
    }

    #[test]
    fn test_failed_outcome_is_error_with_reason() {
        let outcome = ScanOutcome::Failed { reason: "provider quota exceeded".to_string() };
        let (tier, action) = categorize_outcome(&outcome);

        assert_eq!(tier, RiskTier::Error);
        assert_eq!(action, "Analysis failed - provider quota exceeded");
    }

    #[test]
    fn test_completed_outcome_delegates() {
        let outcome = ScanOutcome::Completed { positives: 25, total: 100 };
        assert_eq!(categorize_outcome(&outcome).0, RiskTier::Critical);
    }
}
