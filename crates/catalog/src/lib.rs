//! Static technology catalog for Stackdex.
//!
//! This crate embeds a fixed catalog of named, categorized technology
//! entries (languages, frameworks, libraries, databases, servers, tools,
//! platforms, and aggregate stacks) and exposes read-only queries over it:
//! - Exact and partial name lookup
//! - Category queries and set-style filtering/sorting combinators
//! - Fuzzy search, name search, and autocomplete (via `stackdex-search`)
//! - Aggregate statistics
//! - Semantic validation of catalog data
//!
//! The catalog is parsed once on first access and never mutated, so every
//! operation is a pure computation that can run from multiple threads
//! without coordination.
//!
//! # Example
//!
//! ```
//! use stackdex_catalog::{find_by_name, search_by_name, TechnologyType};
//!
//! let rust = find_by_name("rust").unwrap();
//! assert_eq!(rust.category, TechnologyType::Language);
//!
//! let hits = search_by_name("JavaScript", 10);
//! assert_eq!(hits[0].technology.name, "JavaScript");
//! assert_eq!(hits[0].score, 1.0);
//! ```

mod catalog;
pub mod categories;
mod error;
pub mod filters;
pub mod lookup;
pub mod search;
pub mod statistics;
mod types;
pub mod validate;

pub use catalog::{catalog, metadata, technologies, technology_count};
pub use error::{CatalogError, Result};
pub use lookup::{exists, find_by_name, find_by_name_strict, find_by_partial_name};
pub use search::{autocomplete, search_by_name, search_tech, DEFAULT_SEARCH_MAX_RESULTS};
pub use types::{
    Catalog, CatalogMetadata, CatalogStatistics, CategoryMetadata, FieldMatch, FilterCriteria,
    MatchedField, SearchHit, SearchOptions, StackComponent, Technology, TechnologyType,
};
pub use validate::ValidationReport;
