//! Analysis Module
//!
//! The pure attribution and scoring engine. This is the CORE STEP:
//! a scan result comes in, a tier + technique set + tactic set +
//! composite risk score come out.
//!
//! ## Structure
//! - `types`: core types (RiskTier, ScanContext, AttributionResult, ...)
//! - `rules`: pattern tables, severity/weight tables, tier bands
//! - `categorizer`: detector ratio -> tier + recommended action
//! - `identifier`: ScanContext -> candidate technique ids
//! - `tactics`: technique ids + catalog -> tactic set
//! - `scorer`: technique ids + catalog -> composite score
//! - `analyzer`: full pipeline glue
//! - `history`: caller-owned record of past analyses
//!
//! Every function here is deterministic, non-blocking, and free of
//! shared state; the catalog is taken by `&` and never mutated.

pub mod types;
pub mod rules;
pub mod categorizer;
pub mod identifier;
pub mod tactics;
pub mod scorer;
pub mod analyzer;
pub mod history;

// Re-export main types for convenience
pub use types::{
    AnalysisReport, AttributionResult, RiskTier, ScanContext, ScanOutcome, ScoreBreakdown,
};

pub use analyzer::analyze;
pub use categorizer::{categorize, categorize_outcome};
pub use history::{AnalysisHistory, HistorySummary, TierBucket, UrlScore};
pub use identifier::identify;
pub use scorer::score;
pub use tactics::map_tactics;
