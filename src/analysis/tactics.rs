//! Tactic Mapper
//!
//! Resolves a technique-id set to the tactics those techniques belong
//! to, via the catalog. Ids the catalog does not know are silently
//! skipped - in fallback mode the catalog covers only a fraction of the
//! rule-referenced ids, and that is expected, not an error.

use std::collections::BTreeSet;

use crate::catalog::TechniqueCatalog;

/// Union of catalog tactics over the id set. Empty input yields empty
/// output.
pub fn map_tactics(ids: &BTreeSet<&str>, catalog: &TechniqueCatalog) -> BTreeSet<String> {
    let mut tactics = BTreeSet::new();

    for id in ids {
        if let Some(record) = catalog.get(id) {
            tactics.extend(record.tactics.iter().cloned());
        }
    }

    tactics
}

// ============================================================================
// TESTS
// ============================================================================
