//! Analysis Types
//!
//! Core types for attribution and scoring. No logic here - rules live
//! in `rules`, evaluation in the sibling modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// RISK TIER
// ============================================================================

/// Ordinal risk tier assigned from the detector-positive ratio.
///
/// Ordering is fixed (LOW < MEDIUM < HIGH < CRITICAL) and used for
/// reporting and thresholds only - the scorer never consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    /// Ratio unavailable (zero detector total)
    Unknown,
    Low,
    Medium,
    High,
    Critical,
    /// The scan lookup itself failed
    Error,
}

impl RiskTier {
    /// All tiers in reporting order
    pub const ALL: [RiskTier; 6] = [
        RiskTier::Unknown,
        RiskTier::Low,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::Critical,
        RiskTier::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Unknown => "UNKNOWN",
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
            RiskTier::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCAN PROVIDER OUTPUT
// ============================================================================

/// What came back from the external scan provider for a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// Scan completed with a detector ratio
    Completed { positives: u32, total: u32 },
    /// The lookup itself failed (network, quota, provider error)
    Failed { reason: String },
}

impl ScanOutcome {
    /// Positive-detector count, 0 for a failed lookup
    pub fn positives(&self) -> u32 {
        match self {
            ScanOutcome::Completed { positives, .. } => *positives,
            ScanOutcome::Failed { .. } => 0,
        }
    }
}

// ============================================================================
// SCAN CONTEXT
// ============================================================================

/// Input to technique identification. Transient - built per analysis
/// request and not persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanContext {
    pub url: String,
    pub positives: u32,
    pub risk_tier: RiskTier,
}

impl ScanContext {
    pub fn new(url: &str, positives: u32, risk_tier: RiskTier) -> Self {
        Self {
            url: url.to_string(),
            positives,
            risk_tier,
        }
    }
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// The four sub-scores behind the composite, for explainability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Mean tactic-weighted base severity (0-100)
    pub technique_severity: f32,
    /// Kill-chain phase coverage (0-100)
    pub technique_coverage: f32,
    /// Share of techniques with detection guidance (0-100)
    pub detection_coverage: f32,
    /// Share of techniques with mitigation guidance (0-100)
    pub mitigation_status: f32,
    /// Weighted composite before flooring (0-100)
    pub final_score: f32,
}

// ============================================================================
// ATTRIBUTION RESULT
// ============================================================================

/// Engine output: which techniques and tactics a scan implicates, and
/// the composite risk score. Immutable once produced; order of the id
/// and tactic lists carries no meaning (they are sorted for stable
/// output only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionResult {
    pub techniques: Vec<String>,
    pub tactics: Vec<String>,
    /// Composite risk score, 0-100
    pub risk_score: u8,
    /// Computation time (serializes as ISO-8601)
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// ANALYSIS REPORT
// ============================================================================

/// Full per-URL result handed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub risk_category: RiskTier,
    /// Human-readable recommended action for the tier
    pub action_required: String,
    pub attribution: AttributionResult,
    pub score_breakdown: ScoreBreakdown,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
        assert!(RiskTier::High < RiskTier::Critical);
    }

    #[test]
    fn test_tier_serde_names() {
        assert_eq!(serde_json::to_string(&RiskTier::Critical).unwrap(), "\"CRITICAL\"");
        let tier: RiskTier = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(tier, RiskTier::Medium);
    }

    #[test]
    fn test_outcome_positives() {
        let done = ScanOutcome::Completed { positives: 7, total: 70 };
        assert_eq!(done.positives(), 7);

        let failed = ScanOutcome::Failed { reason: "quota exceeded".to_string() };
        assert_eq!(failed.positives(), 0);
    }

    #[test]
    fn test_outcome_serde_tag() {
        let json = serde_json::to_string(&ScanOutcome::Completed { positives: 1, total: 2 }).unwrap();
        assert!(json.contains("\"status\":\"completed\""));
    }
}
