//! Generic fuzzy matching for Stackdex.
//!
//! This crate provides:
//! - Levenshtein edit distance over grapheme clusters
//! - Normalized similarity scoring in `[0, 1]`
//! - A generic score-filter-sort-truncate ranking routine
//!
//! The ranking routine is parameterized over the item type and a projection
//! function, so it works over any collection of items that can produce a
//! comparison string, not just catalog records.
//!
//! # Example
//!
//! ```
//! use stackdex_search::{best_matches, similarity};
//!
//! let langs = vec!["JavaScript", "TypeScript", "Python"];
//! let ranked = best_matches("javascrpt", langs, |s| s.to_string(), 10, 0.3);
//!
//! assert_eq!(ranked[0].item, "JavaScript");
//! assert!(ranked[0].score > similarity("javascrpt", "Python"));
//! ```

mod fuzzy;
mod matcher;

pub use fuzzy::{fuzzy_match, levenshtein_distance, similarity, DEFAULT_FUZZY_THRESHOLD};
pub use matcher::{best_matches, Match, DEFAULT_MAX_RESULTS, DEFAULT_SCORE_THRESHOLD};
