//! Embedded catalog data and accessors.
//!
//! The catalog ships as a JSON file compiled into the binary and is parsed
//! exactly once, on first access. It is never mutated afterwards, so the
//! accessors are safe to call from multiple threads without coordination.

use crate::error::Result;
use crate::types::{Catalog, CatalogMetadata, Technology};
use once_cell::sync::Lazy;

static CATALOG_JSON: &str = include_str!("../data/catalog.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    // The embedded file is a build artifact, not runtime input; a parse
    // failure here is a shipping defect.
    serde_json::from_str(CATALOG_JSON).expect("embedded catalog data must be valid JSON")
});

impl Catalog {
    /// Parse a catalog from a JSON string.
    ///
    /// Field presence and category tags are checked by the deserializer;
    /// semantic rules (duplicates, stack coherence, dangling component
    /// references) are the job of [`crate::validate::validate_catalog`].
    ///
    /// # Errors
    /// Returns [`crate::CatalogError::Parse`] on malformed input.
    pub fn from_json(json: &str) -> Result<Catalog> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Returns the complete embedded catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Returns the ordered list of all catalog entries.
///
/// Entry order matters: search ties and substring-mode results preserve it.
pub fn technologies() -> &'static [Technology] {
    &CATALOG.technologies
}

/// Returns the catalog metadata.
pub fn metadata() -> &'static CatalogMetadata {
    &CATALOG.metadata
}

/// Returns the total number of catalog entries.
pub fn technology_count() -> usize {
    CATALOG.technologies.len()
}
