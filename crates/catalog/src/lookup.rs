//! Exact and partial name lookup.

use crate::catalog::technologies;
use crate::types::Technology;

/// Find a technology by exact name, case-insensitively.
///
/// The input is trimmed before comparison.
pub fn find_by_name(name: &str) -> Option<&'static Technology> {
    let normalized = name.trim().to_lowercase();
    technologies()
        .iter()
        .find(|tech| tech.name.to_lowercase() == normalized)
}

/// Find a technology by exact name, case-sensitively.
///
/// The input is trimmed before comparison.
pub fn find_by_name_strict(name: &str) -> Option<&'static Technology> {
    let trimmed = name.trim();
    technologies().iter().find(|tech| tech.name == trimmed)
}

/// Find all technologies whose name contains the given substring.
///
/// The input is trimmed; comparison is case-folded unless `case_sensitive`.
pub fn find_by_partial_name(partial: &str, case_sensitive: bool) -> Vec<&'static Technology> {
    let term = if case_sensitive {
        partial.trim().to_string()
    } else {
        partial.trim().to_lowercase()
    };

    technologies()
        .iter()
        .filter(|tech| {
            if case_sensitive {
                tech.name.contains(&term)
            } else {
                tech.name.to_lowercase().contains(&term)
            }
        })
        .collect()
}

/// Check whether a technology with the given name exists.
pub fn exists(name: &str) -> bool {
    find_by_name(name).is_some()
}
