//! Risk Scorer
//!
//! Computes the bounded [0,100] composite risk score from an identified
//! technique set:
//!
//! ```text
//! score = severity*0.4 + coverage*0.3 + detection*0.2 + mitigation*0.1
//! ```
//!
//! - severity:   mean of base severity x max tactic-phase weight
//! - coverage:   sum of per-technique tactic-count/12, scaled, capped
//! - detection:  share of techniques with detection guidance
//! - mitigation: share of techniques with mitigation guidance
//!
//! Never errors: unknown ids take the default base severity, techniques
//! without resolvable tactics take the default phase weight, and the
//! empty set scores 0.

use std::collections::BTreeSet;

use crate::catalog::TechniqueCatalog;

use super::rules::{
    BASE_SEVERITY, COVERAGE_WEIGHT, DEFAULT_BASE_SEVERITY, DEFAULT_PHASE_WEIGHT, DETECTION_WEIGHT,
    MITIGATION_WEIGHT, PHASE_WEIGHTS, SEVERITY_WEIGHT, TOTAL_KILL_CHAIN_PHASES,
};
use super::types::ScoreBreakdown;

/// Score a technique set against the catalog.
///
/// Returns the floored composite score and the sub-score breakdown.
pub fn score(ids: &BTreeSet<&str>, catalog: &TechniqueCatalog) -> (u8, ScoreBreakdown) {
    if ids.is_empty() {
        return (0, ScoreBreakdown::default());
    }

    let mut severity_sum = 0.0f32;
    let mut coverage_sum = 0.0f32;
    let mut detection_hits = 0u32;
    let mut mitigation_hits = 0u32;

    for id in ids {
        let base = BASE_SEVERITY.get(id).copied().unwrap_or(DEFAULT_BASE_SEVERITY);
        let record = catalog.get(id);

        let multiplier = record
            .map(|r| tactic_multiplier(&r.tactics))
            .unwrap_or(DEFAULT_PHASE_WEIGHT);
        severity_sum += base * multiplier;

        if let Some(record) = record {
            coverage_sum += record.tactics.len() as f32 / TOTAL_KILL_CHAIN_PHASES as f32;
            if !record.detection.is_empty() {
                detection_hits += 1;
            }
            if !record.mitigation.is_empty() {
                mitigation_hits += 1;
            }
        }
    }

    let count = ids.len() as f32;
    let technique_severity = severity_sum / count;
    let technique_coverage = (coverage_sum * 100.0).min(100.0);
    let detection_coverage = detection_hits as f32 / count * 100.0;
    let mitigation_status = mitigation_hits as f32 / count * 100.0;

    let final_score = (technique_severity * SEVERITY_WEIGHT
        + technique_coverage * COVERAGE_WEIGHT
        + detection_coverage * DETECTION_WEIGHT
        + mitigation_status * MITIGATION_WEIGHT)
        .min(100.0);

    let breakdown = ScoreBreakdown {
        technique_severity,
        technique_coverage,
        detection_coverage,
        mitigation_status,
        final_score,
    };

    // Floor to integer
    (final_score as u8, breakdown)
}

/// Max phase weight over a technique's tactics.
///
/// Tactic names are lowercased before lookup; names that still miss the
/// hyphenated phase keys (the fallback set's display names do) take the
/// default weight.
fn tactic_multiplier(tactics: &[String]) -> f32 {
    tactics
        .iter()
        .map(|t| {
            PHASE_WEIGHTS
                .get(t.to_lowercase().as_str())
                .copied()
                .unwrap_or(DEFAULT_PHASE_WEIGHT)
        })
        .fold(None::<f32>, |acc, w| Some(acc.map_or(w, |a| a.max(w))))
        .unwrap_or(DEFAULT_PHASE_WEIGHT)
}

// ============================================================================
// TESTS
// ============================================================================
