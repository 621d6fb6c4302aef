//! Technique Catalog Module
//!
//! The knowledge base consulted by the attribution engine: a read-only
//! table of ATT&CK technique records keyed by technique id.
//!
//! # Components
//! - `types`: record/catalog data structures (no logic)
//! - `loader`: STIX bundle fetch + parse + derived severity
//! - `fallback`: embedded static set used when the fetch yields nothing
//!
//! `load()` never fails: any network, HTTP, or parse problem silently
//! falls back to the embedded set, and callers always receive a
//! ready-to-use catalog.

pub mod types;
pub mod loader;
pub mod fallback;

pub use types::{CatalogError, CatalogStats, TechniqueCatalog, TechniqueRecord};

pub use loader::{load, load_from};
pub use fallback::fallback_records;
