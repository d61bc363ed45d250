//! Error types for the catalog crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Unrecognized category tag
    #[error(
        "unknown category \"{value}\", expected one of: Language, Framework, \
         Library, Database, Server, Tool, Platform, Stack"
    )]
    UnknownCategory {
        /// The offending tag
        value: String,
    },
}
