//! Filtering and sorting combinators.

use crate::catalog::technologies;
use crate::types::{FilterCriteria, Technology, TechnologyType};
use std::collections::HashSet;

/// Filter the catalog by a conjunction of criteria.
///
/// Empty or default criteria return every entry. Results keep catalog
/// order.
pub fn filter(criteria: &FilterCriteria) -> Vec<&'static Technology> {
    let mut result: Vec<&'static Technology> = technologies().iter().collect();

    if let Some(categories) = &criteria.categories {
        if !categories.is_empty() {
            result.retain(|tech| categories.contains(&tech.category));
        }
    }

    if let Some(name_contains) = &criteria.name_contains {
        let term = if criteria.case_sensitive {
            name_contains.clone()
        } else {
            name_contains.to_lowercase()
        };
        result.retain(|tech| {
            if criteria.case_sensitive {
                tech.name.contains(&term)
            } else {
                tech.name.to_lowercase().contains(&term)
            }
        });
    }

    if criteria.exclude_stacks {
        result.retain(|tech| tech.is_simple());
    }

    if criteria.only_stacks {
        result.retain(|tech| tech.is_stack());
    }

    result
}

/// Returns stacks containing a component with the given name.
///
/// Component names are compared case-insensitively.
pub fn stacks_with_component(component_name: &str) -> Vec<&'static Technology> {
    let normalized = component_name.to_lowercase();

    technologies()
        .iter()
        .filter(|tech| {
            tech.components
                .as_deref()
                .is_some_and(|components| {
                    components.iter().any(|c| c.name.to_lowercase() == normalized)
                })
        })
        .collect()
}

/// Returns stacks containing at least one component of the given category.
pub fn stacks_with_component_category(category: TechnologyType) -> Vec<&'static Technology> {
    technologies()
        .iter()
        .filter(|tech| {
            tech.components
                .as_deref()
                .is_some_and(|components| components.iter().any(|c| c.category == category))
        })
        .collect()
}

/// Returns the unique technologies that appear as components in any stack.
///
/// Matching is by name, case-insensitively; results keep catalog order.
pub fn used_in_stacks() -> Vec<&'static Technology> {
    let component_names = collect_component_names();

    technologies()
        .iter()
        .filter(|tech| component_names.contains(&tech.name.to_lowercase()))
        .collect()
}

/// Returns non-stack technologies referenced by no stack.
pub fn standalone_technologies() -> Vec<&'static Technology> {
    let component_names = collect_component_names();

    technologies()
        .iter()
        .filter(|tech| {
            tech.is_simple() && !component_names.contains(&tech.name.to_lowercase())
        })
        .collect()
}

/// Sort technologies by name. The input slice is not mutated.
pub fn sorted_by_name<'a>(
    technologies: &[&'a Technology],
    ascending: bool,
) -> Vec<&'a Technology> {
    let mut sorted = technologies.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.name.cmp(&b.name);
        if ascending { ordering } else { ordering.reverse() }
    });
    sorted
}

/// Sort technologies by category position, then by name within each
/// category. The input slice is not mutated.
///
/// `order` defaults to declaration order. Categories absent from a custom
/// order sort before every listed one.
pub fn sorted_by_category<'a>(
    technologies: &[&'a Technology],
    order: Option<&[TechnologyType]>,
) -> Vec<&'a Technology> {
    let order = order.unwrap_or(&TechnologyType::ALL);

    // Mirrors indexOf arithmetic: a missing category maps to -1, below
    // any listed position.
    let position = |category: TechnologyType| -> isize {
        order
            .iter()
            .position(|c| *c == category)
            .map_or(-1, |p| p as isize)
    };

    let mut sorted = technologies.to_vec();
    sorted.sort_by(|a, b| {
        position(a.category)
            .cmp(&position(b.category))
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

fn collect_component_names() -> HashSet<String> {
    technologies()
        .iter()
        .filter_map(|tech| tech.components.as_deref())
        .flatten()
        .map(|component| component.name.to_lowercase())
        .collect()
}
