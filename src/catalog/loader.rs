//! Catalog Loader
//!
//! Fetches the enterprise ATT&CK dataset (a STIX bundle) over HTTP,
//! extracts attack-pattern objects into `TechniqueRecord`s, and derives
//! a build-time severity per record.
//!
//! Fail-soft by contract: `load()` never errors. Any transport, HTTP,
//! or parse failure - and a bundle with zero usable techniques - falls
//! back to the embedded set from `fallback`.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::constants;

use super::fallback;
use super::types::{CatalogError, TechniqueCatalog, TechniqueRecord};

// ============================================================================
// CONSTANTS
// ============================================================================

/// STIX object type carrying a technique definition
const ATTACK_PATTERN_TYPE: &str = "attack-pattern";

/// Technique id format: letters+digits with an optional dotted numeric
/// suffix, e.g. "T1190" or "T1204.001". Filters out source references
/// whose external id is not a technique ("enterprise-attack" etc.).
static TECHNIQUE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]+[0-9]+(\.[0-9]+)?$").expect("valid technique id regex"));

// ============================================================================
// STIX BUNDLE SHAPE (only the fields we read)
// ============================================================================

#[derive(Debug, Deserialize)]
struct AttackBundle {
    #[serde(default)]
    objects: Vec<AttackObject>,
}

#[derive(Debug, Default, Deserialize)]
struct AttackObject {
    #[serde(rename = "type", default)]
    object_type: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    kill_chain_phases: Vec<KillChainPhase>,
    #[serde(default)]
    external_references: Vec<ExternalReference>,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(rename = "x_mitre_platforms", default)]
    platforms: Vec<String>,
    #[serde(rename = "x_mitre_detection", default)]
    detection: String,
    #[serde(rename = "x_mitre_data_sources", default)]
    data_sources: Vec<String>,
    #[serde(rename = "x_mitre_permissions_required", default)]
    permissions_required: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct KillChainPhase {
    #[serde(default)]
    phase_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalReference {
    #[serde(default)]
    external_id: Option<String>,
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Load the technique catalog from the configured source, falling back
/// to the embedded set on any failure. Never errors.
pub fn load() -> TechniqueCatalog {
    load_from(&constants::get_attack_source_url())
}

/// Load from an explicit source URL (the env-configured one in
/// production, an unreachable or mock one in tests).
pub fn load_from(url: &str) -> TechniqueCatalog {
    match fetch_remote(url) {
        Ok(catalog) => {
            log::info!("Cached {} ATT&CK techniques from {}", catalog.len(), url);
            catalog
        }
        Err(e) => {
            log::warn!("ATT&CK fetch failed ({}), using embedded fallback set", e);
            TechniqueCatalog::from_records(fallback::fallback_records(), true)
        }
    }
}

// ============================================================================
// FETCH + PARSE
// ============================================================================

fn fetch_remote(url: &str) -> Result<TechniqueCatalog, CatalogError> {
    let response = ureq::get(url)
        .timeout(Duration::from_secs(constants::get_fetch_timeout_secs()))
        .set("User-Agent", constants::FETCH_USER_AGENT)
        .set("Accept", "application/json")
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(status, _) => CatalogError::Http { status },
            other => CatalogError::Network { message: other.to_string() },
        })?;

    let body = response
        .into_string()
        .map_err(|e| CatalogError::Network { message: e.to_string() })?;

    let records = parse_bundle(&body)?;
    Ok(TechniqueCatalog::from_records(records, false))
}

/// Parse a STIX bundle into technique records.
///
/// Keeps only attack-pattern objects whose first external reference
/// carries a well-formed technique id. Errors when the body is not
/// JSON or when nothing usable was extracted.
pub(crate) fn parse_bundle(body: &str) -> Result<Vec<TechniqueRecord>, CatalogError> {
    let bundle: AttackBundle =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse { message: e.to_string() })?;

    let mut records = Vec::new();
    for obj in &bundle.objects {
        if obj.object_type != ATTACK_PATTERN_TYPE {
            continue;
        }

        let technique_id = match obj.external_references.first().and_then(|r| r.external_id.as_deref()) {
            Some(id) if TECHNIQUE_ID_RE.is_match(id) => id.to_string(),
            _ => continue,
        };

        records.push(TechniqueRecord {
            id: technique_id,
            name: obj.name.clone(),
            description: obj.description.clone(),
            tactics: obj.kill_chain_phases.iter().map(|p| p.phase_name.clone()).collect(),
            platforms: obj.platforms.clone(),
            detection: obj.detection.clone(),
            // The STIX bundle carries mitigations as separate
            // course-of-action objects, which we do not resolve.
            mitigation: String::new(),
            data_sources: obj.data_sources.clone(),
            severity: derive_severity(obj),
        });
    }

    if records.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(records)
}

// ============================================================================
// DERIVED SEVERITY
// ============================================================================

/// Build-time severity: five fixed-point conditions, capped at 100.
fn derive_severity(obj: &AttackObject) -> u8 {
    let mut severity = 0u32;

    if obj.permissions_required == ["None"] {
        severity += 20;
    }
    if obj.labels.iter().any(|l| l == "Commonly Used") {
        severity += 15;
    }
    if obj.detection == "Difficult" {
        severity += 25;
    }
    if obj.platforms.len() > 3 {
        severity += 10;
    }
    if obj.data_sources.len() < 2 {
        severity += 15;
    }

    severity.min(100) as u8
}

// ============================================================================
// TESTS
// ============================================================================
