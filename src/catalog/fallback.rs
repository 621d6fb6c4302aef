//! Embedded Fallback Set
//!
//! A minimal static catalog used when the remote ATT&CK fetch fails or
//! yields nothing. Fallback is all-or-nothing: the catalog is never
//! populated from both sources at once.

use super::types::TechniqueRecord;

/// The embedded fallback techniques (exactly these two ids).
pub fn fallback_records() -> Vec<TechniqueRecord> {
    vec![
        TechniqueRecord {
            id: "T1071.001".to_string(),
            name: "Web Protocols".to_string(),
            description: "Adversaries may communicate using application layer protocols \
                          associated with web traffic to avoid detection/network filtering."
                .to_string(),
            tactics: vec!["Command and Control".to_string()],
            platforms: vec![],
            detection: String::new(),
            mitigation: String::new(),
            data_sources: vec![],
            severity: 60,
        },
        TechniqueRecord {
            id: "T1496".to_string(),
            name: "Resource Hijacking".to_string(),
            description: "Adversaries may leverage the resources of co-opted systems in order \
                          to solve resource intensive problems which may impact system and/or \
                          hosted service availability."
                .to_string(),
            tactics: vec!["Impact".to_string()],
            platforms: vec![],
            detection: String::new(),
            mitigation: String::new(),
            data_sources: vec![],
            severity: 70,
        },
    ]
}
