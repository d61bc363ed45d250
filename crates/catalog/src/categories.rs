//! Category-based queries.

use crate::catalog::technologies;
use crate::types::{Technology, TechnologyType};

/// Returns all technologies in the given category, in catalog order.
pub fn by_category(category: TechnologyType) -> Vec<&'static Technology> {
    technologies()
        .iter()
        .filter(|tech| tech.category == category)
        .collect()
}

/// Returns all technologies whose category is in the given set, in catalog
/// order.
pub fn by_categories(categories: &[TechnologyType]) -> Vec<&'static Technology> {
    technologies()
        .iter()
        .filter(|tech| categories.contains(&tech.category))
        .collect()
}

/// Returns all non-stack technologies.
pub fn simple_technologies() -> Vec<&'static Technology> {
    technologies().iter().filter(|tech| tech.is_simple()).collect()
}

/// Returns all stack technologies.
pub fn stacks() -> Vec<&'static Technology> {
    technologies().iter().filter(|tech| tech.is_stack()).collect()
}

/// Returns every category tag in declaration order.
pub fn all_categories() -> [TechnologyType; 8] {
    TechnologyType::ALL
}
