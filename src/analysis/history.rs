//! Analysis History
//!
//! Caller-owned record of completed analyses with a per-tier summary
//! for reporting. Deliberately not a global: the surrounding service
//! decides where a history lives and how long it is kept.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::{AnalysisReport, RiskTier};

// ============================================================================
// HISTORY
// ============================================================================

/// Accumulates analysis reports in arrival order.
#[derive(Debug, Clone, Default)]
pub struct AnalysisHistory {
    reports: Vec<AnalysisReport>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed analysis
    pub fn record(&mut self, report: AnalysisReport) {
        self.reports.push(report);
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Most recently recorded report
    pub fn latest(&self) -> Option<&AnalysisReport> {
        self.reports.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisReport> {
        self.reports.iter()
    }

    /// Summarize the history: total count, per-tier buckets in tier
    /// order, latest analysis timestamp.
    pub fn summary(&self) -> HistorySummary {
        let distribution = RiskTier::ALL
            .iter()
            .map(|&tier| TierBucket {
                tier,
                count: self.reports.iter().filter(|r| r.risk_category == tier).count(),
                urls: self
                    .reports
                    .iter()
                    .filter(|r| r.risk_category == tier)
                    .map(|r| UrlScore {
                        url: r.url.clone(),
                        risk_score: r.attribution.risk_score,
                    })
                    .collect(),
            })
            .collect();

        HistorySummary {
            total_analyzed: self.reports.len(),
            distribution,
            latest_timestamp: self.latest().map(|r| r.attribution.timestamp),
        }
    }
}

// ============================================================================
// SUMMARY TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HistorySummary {
    pub total_analyzed: usize,
    /// One bucket per tier, in tier order, empty buckets included
    pub distribution: Vec<TierBucket>,
    pub latest_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierBucket {
    pub tier: RiskTier,
    pub count: usize,
    pub urls: Vec<UrlScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlScore {
    pub url: String,
    pub risk_score: u8,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::analyze;
    use crate::analysis::types::ScanOutcome;
    use crate::catalog::{fallback_records, TechniqueCatalog};

    fn catalog() -> TechniqueCatalog {
        TechniqueCatalog::from_records(fallback_records(), true)
    }

    #[test]
    fn test_empty_history() {
        let history = AnalysisHistory::new();
        assert!(history.is_empty());

        let summary = history.summary();
        assert_eq!(summary.total_analyzed, 0);
        assert!(summary.latest_timestamp.is_none());
        assert!(summary.distribution.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_summary_buckets_by_tier() {
        let catalog = catalog();
        let mut history = AnalysisHistory::new();

        history.record(analyze(
            "https://example.org",
            &ScanOutcome::Completed { positives: 0, total: 70 },
            &catalog,
        ));
        history.record(analyze(
            "https://mirror.example.org",
            &ScanOutcome::Completed { positives: 1, total: 70 },
            &catalog,
        ));
        history.record(analyze(
            "http://malicious-download.exe",
            &ScanOutcome::Completed { positives: 12, total: 100 },
            &catalog,
        ));

        let summary = history.summary();
        assert_eq!(summary.total_analyzed, 3);

        let low = summary.distribution.iter().find(|b| b.tier == RiskTier::Low).unwrap();
        assert_eq!(low.count, 2);

        let high = summary.distribution.iter().find(|b| b.tier == RiskTier::High).unwrap();
        assert_eq!(high.count, 1);
        assert_eq!(high.urls[0].url, "http://malicious-download.exe");
        assert_eq!(high.urls[0].risk_score, 14);

        assert!(summary.latest_timestamp.is_some());
    }

    #[test]
    fn test_latest_tracks_arrival_order() {
        let catalog = catalog();
        let mut history = AnalysisHistory::new();

        history.record(analyze(
            "https://first.example.org",
            &ScanOutcome::Completed { positives: 0, total: 70 },
            &catalog,
        ));
        history.record(analyze(
            "https://second.example.org",
            &ScanOutcome::Completed { positives: 0, total: 70 },
            &catalog,
        ));

        assert_eq!(history.latest().unwrap().url, "https://second.example.org");
        assert_eq!(history.len(), 2);
    }
}
