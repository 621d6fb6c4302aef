//! URL Threat Attribution Core
//!
//! Classifies a scanned URL's threat level, attributes it to ATT&CK
//! techniques and tactics, and computes a single composite risk score
//! used to drive operator action.
//!
//! ## Structure
//! - `catalog`: technique knowledge base (remote ATT&CK fetch + embedded fallback)
//! - `analysis`: the pure engine (categorizer, identifier, tactic mapper, scorer)
//! - `constants`: configuration defaults with env overrides
//!
//! ## Usage
//! ```ignore
//! use url_threat_core::{analyze, catalog, ScanOutcome};
//!
//! let catalog = catalog::load(); // once, at startup
//! let outcome = ScanOutcome::Completed { positives: 12, total: 70 };
//! let report = analyze("http://malicious-download.exe", &outcome, &catalog);
//! println!("{} -> {}", report.risk_category, report.attribution.risk_score);
//! ```
//!
//! Everything except `catalog::load()` is pure and side-effect-free:
//! the catalog is immutable after construction, so any number of
//! analyses may run concurrently against it without coordination.

pub mod constants;

pub mod catalog;
pub mod analysis;

// Re-export the main surface for convenience
pub use catalog::{load, CatalogStats, TechniqueCatalog, TechniqueRecord};

pub use analysis::{
    analyze, categorize, categorize_outcome, identify, map_tactics, score,
    AnalysisHistory, AnalysisReport, AttributionResult, HistorySummary, RiskTier,
    ScanContext, ScanOutcome, ScoreBreakdown,
};
