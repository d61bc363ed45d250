//! Aggregate statistics over the catalog.

use crate::catalog::{metadata, technologies};
use crate::types::{CatalogStatistics, TechnologyType};
use std::collections::BTreeMap;

/// Compute aggregate counts over the catalog.
///
/// `by_category` always contains all eight tags, zeros included.
pub fn statistics() -> CatalogStatistics {
    let mut by_category: BTreeMap<TechnologyType, usize> =
        TechnologyType::ALL.iter().map(|c| (*c, 0)).collect();

    for tech in technologies() {
        *by_category.entry(tech.category).or_insert(0) += 1;
    }

    let total_stacks = technologies().iter().filter(|t| t.is_stack()).count();

    CatalogStatistics {
        total: technologies().len(),
        by_category,
        total_stacks,
        total_simple_technologies: technologies().len() - total_stacks,
        version: metadata().version.clone(),
    }
}

/// Returns the number of technologies in a single category.
pub fn count_for(category: TechnologyType) -> usize {
    technologies()
        .iter()
        .filter(|tech| tech.category == category)
        .count()
}

/// Returns the category with the most technologies.
///
/// Ties resolve to the earliest category in declaration order. An
/// all-empty catalog reports `(Framework, 0)`, the running-maximum
/// initializer.
pub fn most_popular_category() -> (TechnologyType, usize) {
    let stats = statistics();
    let mut max_category = TechnologyType::Framework;
    let mut max_count = 0;

    for category in TechnologyType::ALL {
        let count = stats.by_category[&category];
        if count > max_count {
            max_count = count;
            max_category = category;
        }
    }

    (max_category, max_count)
}
