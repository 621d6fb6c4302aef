//! Analysis Pipeline
//!
//! Glues the pure components together for one URL:
//! scan outcome -> tier + action -> scan context -> technique ids ->
//! tactics + composite score -> `AnalysisReport`.
//!
//! The catalog is taken by `&` and the whole pipeline is deterministic
//! apart from the result timestamp, so concurrent calls need no
//! coordination.

use chrono::Utc;

use crate::catalog::TechniqueCatalog;

use super::categorizer;
use super::identifier;
use super::scorer;
use super::tactics;
use super::types::{AnalysisReport, AttributionResult, ScanContext, ScanOutcome};

/// Run the full attribution pipeline for one scanned URL.
///
/// A failed scan lookup still runs the URL pattern rules - the URL
/// itself can implicate techniques even when no detector ratio exists.
pub fn analyze(url: &str, outcome: &ScanOutcome, catalog: &TechniqueCatalog) -> AnalysisReport {
    let (tier, action) = categorizer::categorize_outcome(outcome);

    let context = ScanContext::new(url, outcome.positives(), tier);
    let techniques = identifier::identify(&context);
    let tactic_names = tactics::map_tactics(&techniques, catalog);
    let (risk_score, score_breakdown) = scorer::score(&techniques, catalog);

    log::debug!(
        "analyzed {}: tier={} techniques={} tactics={} score={}",
        url,
        tier,
        techniques.len(),
        tactic_names.len(),
        risk_score
    );

    AnalysisReport {
        url: url.to_string(),
        risk_category: tier,
        action_required: action,
        attribution: AttributionResult {
            techniques: techniques.iter().map(|id| id.to_string()).collect(),
            tactics: tactic_names.into_iter().collect(),
            risk_score,
            timestamp: Utc::now(),
        },
        score_breakdown,
    }
}

// ============================================================================
// TESTS
// ============================================================================
