//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults.
//! To change the catalog source or fetch timeout, only edit this file
//! (or set the matching environment variable).

/// Default ATT&CK dataset URL (enterprise STIX bundle)
pub const DEFAULT_ATTACK_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/mitre/cti/master/enterprise-attack/enterprise-attack.json";

/// Default catalog fetch timeout (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent with the catalog fetch
pub const FETCH_USER_AGENT: &str = "url-threat-core/0.1";

/// Crate version
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the catalog source URL from environment or use default
pub fn get_attack_source_url() -> String {
    std::env::var("ATTACK_SOURCE_URL").unwrap_or_else(|_| DEFAULT_ATTACK_SOURCE_URL.to_string())
}

/// Get the catalog fetch timeout from environment or use default
pub fn get_fetch_timeout_secs() -> u64 {
    std::env::var("ATTACK_FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
}
