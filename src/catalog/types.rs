//! Catalog Types
//!
//! Data structures for the technique knowledge base.
//! No loading logic here - that lives in `loader` and `fallback`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// TECHNIQUE RECORD
// ============================================================================

/// A single ATT&CK technique as cached in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueRecord {
    /// Canonical technique id, e.g. "T1190" or "T1204.001"
    pub id: String,
    pub name: String,
    pub description: String,
    /// Kill-chain phase names this technique belongs to (order irrelevant)
    pub tactics: Vec<String>,
    pub platforms: Vec<String>,
    /// Free-text detection guidance ("" when the source carries none)
    pub detection: String,
    /// Free-text mitigation guidance ("" when the source carries none)
    pub mitigation: String,
    pub data_sources: Vec<String>,
    /// Severity derived at catalog build time (0-100).
    ///
    /// Independent from the scorer's runtime base-severity table; the
    /// two are distinct on purpose and must not be merged.
    pub severity: u8,
}

// ============================================================================
// TECHNIQUE CATALOG
// ============================================================================

/// Read-only technique knowledge base, keyed by technique id.
///
/// Built once at startup and never mutated afterwards: the map is
/// private and only `&`-accessors are exposed, so analyses may share a
/// catalog across threads without locking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechniqueCatalog {
    records: HashMap<String, TechniqueRecord>,
    /// True when built from the embedded fallback set
    fallback: bool,
}

impl TechniqueCatalog {
    /// Build a catalog from a record list. Later duplicates of an id win.
    pub fn from_records(records: Vec<TechniqueRecord>, fallback: bool) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();
        Self { records, fallback }
    }

    /// Look up a technique by id
    pub fn get(&self, id: &str) -> Option<&TechniqueRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Was this catalog built from the embedded fallback set?
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// All cached technique ids
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All cached records
    pub fn records(&self) -> impl Iterator<Item = &TechniqueRecord> {
        self.records.values()
    }

    /// Catalog statistics for reporting
    pub fn stats(&self) -> CatalogStats {
        let mut by_tactic: HashMap<String, usize> = HashMap::new();
        for record in self.records.values() {
            for tactic in &record.tactics {
                *by_tactic.entry(tactic.clone()).or_insert(0) += 1;
            }
        }

        CatalogStats {
            total_techniques: self.records.len(),
            by_tactic,
            fallback: self.fallback,
        }
    }
}

// ============================================================================
// STATISTICS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_techniques: usize,
    pub by_tactic: HashMap<String, usize>,
    pub fallback: bool,
}

// ============================================================================
// LOADER ERRORS
// ============================================================================

/// Catalog loading error.
///
/// Internal to the loader: `load()` swallows every variant into the
/// fallback path and never surfaces it to callers.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    Network { message: String },
    /// Non-success HTTP status from the source
    Http { status: u16 },
    /// Response was not a parseable STIX bundle
    Parse { message: String },
    /// Bundle parsed but contained zero usable technique objects
    Empty,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Network { message } => write!(f, "network error: {}", message),
            CatalogError::Http { status } => write!(f, "source returned HTTP {}", status),
            CatalogError::Parse { message } => write!(f, "parse error: {}", message),
            CatalogError::Empty => write!(f, "no technique objects found in bundle"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, tactics: &[&str]) -> TechniqueRecord {
        TechniqueRecord {
            id: id.to_string(),
            name: String::new(),
            description: String::new(),
            tactics: tactics.iter().map(|t| t.to_string()).collect(),
            platforms: vec![],
            detection: String::new(),
            mitigation: String::new(),
            data_sources: vec![],
            severity: 50,
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = TechniqueCatalog::from_records(
            vec![record("T1190", &["initial-access"])],
            false,
        );

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("T1190"));
        assert!(catalog.get("T9999").is_none());
        assert!(!catalog.is_fallback());
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let catalog = TechniqueCatalog::from_records(
            vec![record("T1190", &[]), record("T1190", &["initial-access"])],
            false,
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("T1190").unwrap().tactics, vec!["initial-access"]);
    }

    #[test]
    fn test_stats() {
        let catalog = TechniqueCatalog::from_records(
            vec![
                record("T1190", &["initial-access"]),
                record("T1133", &["initial-access", "persistence"]),
            ],
            true,
        );

        let stats = catalog.stats();
        assert_eq!(stats.total_techniques, 2);
        assert_eq!(stats.by_tactic.get("initial-access"), Some(&2));
        assert_eq!(stats.by_tactic.get("persistence"), Some(&1));
        assert!(stats.fallback);
    }
}
