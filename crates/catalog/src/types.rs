//! Data model for the technology catalog.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of category tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TechnologyType {
    Language,
    Framework,
    Library,
    Database,
    Server,
    Tool,
    Platform,
    /// Aggregate entries that own a component list
    Stack,
}

impl TechnologyType {
    /// All category tags in declaration order.
    pub const ALL: [TechnologyType; 8] = [
        TechnologyType::Language,
        TechnologyType::Framework,
        TechnologyType::Library,
        TechnologyType::Database,
        TechnologyType::Server,
        TechnologyType::Tool,
        TechnologyType::Platform,
        TechnologyType::Stack,
    ];

    /// Returns the capitalized tag name as it appears in catalog data.
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnologyType::Language => "Language",
            TechnologyType::Framework => "Framework",
            TechnologyType::Library => "Library",
            TechnologyType::Database => "Database",
            TechnologyType::Server => "Server",
            TechnologyType::Tool => "Tool",
            TechnologyType::Platform => "Platform",
            TechnologyType::Stack => "Stack",
        }
    }
}

impl fmt::Display for TechnologyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TechnologyType {
    type Err = CatalogError;

    /// Parses the exact capitalized tag names only; `"framework"` is
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Language" => Ok(TechnologyType::Language),
            "Framework" => Ok(TechnologyType::Framework),
            "Library" => Ok(TechnologyType::Library),
            "Database" => Ok(TechnologyType::Database),
            "Server" => Ok(TechnologyType::Server),
            "Tool" => Ok(TechnologyType::Tool),
            "Platform" => Ok(TechnologyType::Platform),
            "Stack" => Ok(TechnologyType::Stack),
            other => Err(CatalogError::UnknownCategory {
                value: other.to_string(),
            }),
        }
    }
}

/// A denormalized (name, category) reference inside a stack.
///
/// Components identify other catalog entries by name; they are copies, not
/// pointers, and may fail to resolve. Resolution is checked by
/// [`crate::validate::validate_catalog`], not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackComponent {
    /// Referenced technology name
    pub name: String,
    /// Referenced technology category (never `Stack` in well-formed data)
    pub category: TechnologyType,
}

/// A named, categorized catalog entry.
///
/// Entries with `category == Stack` carry a component list; the
/// stack/components coherence is a validation rule over the denormalized
/// data, enforced by [`crate::validate::validate_technology`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    /// Entry name (unique within the catalog, expected but not enforced here)
    pub name: String,
    /// Category tag
    pub category: TechnologyType,
    /// Ordered component list, present only for stacks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<StackComponent>>,
}

impl Technology {
    /// Returns true if this entry is an aggregate stack.
    pub fn is_stack(&self) -> bool {
        self.category == TechnologyType::Stack
    }

    /// Returns true if this entry is a simple (non-stack) technology.
    pub fn is_simple(&self) -> bool {
        !self.is_stack()
    }
}

/// Per-category descriptive metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMetadata {
    /// Short description of the category
    pub description: String,
    /// Example entry names
    pub examples: Vec<String>,
}

/// Catalog-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Catalog name
    pub name: String,
    /// Data version
    pub version: String,
    /// Human-readable description
    pub description: String,
    /// Total number of entries (matches the technology list length)
    pub total_technologies: usize,
    /// Per-category descriptions keyed by tag name
    pub categories: BTreeMap<String, CategoryMetadata>,
    /// Intended usage note
    pub usage: String,
}

/// The complete catalog: metadata plus the ordered entry list.
///
/// Entry order is significant: ranked search ties and substring-mode
/// results preserve it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog metadata
    pub metadata: CatalogMetadata,
    /// Ordered entries
    pub technologies: Vec<Technology>,
}

/// Aggregate counts over the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStatistics {
    /// Total number of entries
    pub total: usize,
    /// Count per category; every tag is present, zeros included
    pub by_category: BTreeMap<TechnologyType, usize>,
    /// Number of stack entries
    pub total_stacks: usize,
    /// Number of non-stack entries
    pub total_simple_technologies: usize,
    /// Catalog data version
    pub version: String,
}

/// Options for [`crate::search::search_tech`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Use fuzzy (edit-distance) matching; substring containment otherwise
    pub fuzzy: bool,
    /// Compare with original casing (substring mode only, see
    /// [`crate::search`])
    pub case_sensitive: bool,
    /// Maximum number of results; `0` yields an empty result
    pub max_results: usize,
    /// Restrict candidates to these categories; `None` or an empty list
    /// applies no restriction
    pub categories: Option<Vec<TechnologyType>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            case_sensitive: false,
            max_results: crate::search::DEFAULT_SEARCH_MAX_RESULTS,
            categories: None,
        }
    }
}

/// Which record field a search hit matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Name,
    Category,
}

/// A matched field and its original-cased value.
#[derive(Debug, Clone, Serialize)]
pub struct FieldMatch {
    /// The matched field
    pub field: MatchedField,
    /// The field's value as stored in the catalog
    pub value: String,
}

/// A single search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// The matched catalog entry
    pub technology: &'static Technology,
    /// Similarity score in `[0, 1]`; substring mode reports a fixed `1.0`
    pub score: f64,
    /// Matched fields; empty for name-only search
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<FieldMatch>,
}

/// Conjunction of filter conditions for [`crate::filters::filter`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Keep only these categories; `None` or an empty list keeps all
    pub categories: Option<Vec<TechnologyType>>,
    /// Keep entries whose name contains this substring
    pub name_contains: Option<String>,
    /// Compare `name_contains` with original casing
    pub case_sensitive: bool,
    /// Drop stack entries
    pub exclude_stacks: bool,
    /// Keep only stack entries
    pub only_stacks: bool,
}
