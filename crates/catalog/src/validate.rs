//! Semantic validation of catalog data.
//!
//! Field presence and category tags are checked by the deserializer when
//! data is parsed; this module covers the rules the type system cannot
//! express: non-empty names, stack/component coherence, duplicates, and
//! dangling component references.

use crate::types::{SearchOptions, Technology, TechnologyType};
use serde::Serialize;

/// Collected validation errors and warnings.
///
/// Errors make the data invalid; warnings flag suspicious but usable data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Blocking problems
    pub errors: Vec<String>,
    /// Non-blocking problems
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether validation passed (no errors; warnings allowed).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Validate a single technology entry.
///
/// Checks: non-empty name; stacks carry a non-empty component list;
/// components are never stacks themselves; non-stack entries carry no
/// component list.
pub fn validate_technology(tech: &Technology) -> ValidationReport {
    let mut report = ValidationReport::new();

    if tech.name.trim().is_empty() {
        report.error("technology name must not be empty");
    }

    match (&tech.components, tech.is_stack()) {
        (None, true) => {
            report.error(format!("stack \"{}\" must have a component list", tech.name));
        }
        (Some(components), true) => {
            if components.is_empty() {
                report.error(format!(
                    "stack \"{}\" must have at least one component",
                    tech.name
                ));
            }
            for (index, component) in components.iter().enumerate() {
                if component.name.trim().is_empty() {
                    report.error(format!(
                        "stack \"{}\" component at index {} has an empty name",
                        tech.name, index
                    ));
                }
                if component.category == TechnologyType::Stack {
                    report.error(format!(
                        "stack \"{}\" component \"{}\" cannot be of category Stack",
                        tech.name, component.name
                    ));
                }
            }
        }
        (Some(_), false) => {
            report.error(format!(
                "non-stack technology \"{}\" must not carry components",
                tech.name
            ));
        }
        (None, false) => {}
    }

    report
}

/// Validate the structure of a stack entry.
///
/// The entry must be a stack with at least one component; duplicate
/// component names (case-insensitive) are errors.
pub fn validate_stack(tech: &Technology) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !tech.is_stack() {
        report.error(format!("technology \"{}\" is not a stack", tech.name));
        return report;
    }

    let components = tech.components.as_deref().unwrap_or_default();
    if components.is_empty() {
        report.error(format!(
            "stack \"{}\" must have at least one component",
            tech.name
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for (index, component) in components.iter().enumerate() {
        if !seen.insert(component.name.to_lowercase()) {
            report.error(format!(
                "stack \"{}\" has duplicate component at index {}: \"{}\"",
                tech.name, index, component.name
            ));
        }
    }

    report
}

/// Validate consistency across a whole catalog.
///
/// Duplicate entry names and per-entry rule violations are errors;
/// dangling component references and component/catalog category mismatches
/// are warnings (components are denormalized copies and may legitimately
/// drift).
pub fn validate_catalog(technologies: &[Technology]) -> ValidationReport {
    let mut report = ValidationReport::new();

    let mut names: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for (index, tech) in technologies.iter().enumerate() {
        let normalized = tech.name.to_lowercase();
        if let Some(first) = names.get(&normalized) {
            report.error(format!(
                "duplicate technology name \"{}\" at indices {} and {}",
                tech.name, first, index
            ));
        } else {
            names.insert(normalized, index);
        }

        let entry_report = validate_technology(tech);
        if !entry_report.is_valid() {
            report.error(format!(
                "technology at index {} (\"{}\") is invalid: {}",
                index,
                tech.name,
                entry_report.errors.join(", ")
            ));
        }
    }

    for stack in technologies.iter().filter(|t| t.is_stack()) {
        for component in stack.components.as_deref().unwrap_or_default() {
            let resolved = technologies
                .iter()
                .find(|t| t.name.to_lowercase() == component.name.to_lowercase());

            match resolved {
                None => report.warning(format!(
                    "stack \"{}\" references component \"{}\" which is not in the catalog",
                    stack.name, component.name
                )),
                Some(found) if found.category != component.category => {
                    report.warning(format!(
                        "stack \"{}\" component \"{}\" has category mismatch: \
                         stack says {}, catalog says {}",
                        stack.name, component.name, component.category, found.category
                    ));
                }
                Some(_) => {}
            }
        }
    }

    report
}

/// Validate search options for callers that want strictness up front.
///
/// The search facade itself clamps odd values to an empty result; this
/// reports them as errors instead.
pub fn validate_search_options(options: &SearchOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    if options.max_results == 0 {
        report.error("option \"maxResults\" must be at least 1");
    }

    report
}

/// Clean a technology name: trim and collapse internal whitespace runs to
/// single spaces.
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
