//! Walkthrough of the catalog API: metadata, lookup, category queries,
//! fuzzy search, autocomplete, filtering, and validation.
//!
//! Run with `cargo run -p stackdex-catalog --example basic_usage`.

use stackdex_catalog::{
    autocomplete, categories, filters, find_by_name, metadata, search_tech, statistics,
    technologies, validate, FilterCriteria, SearchOptions, TechnologyType,
};

fn main() {
    let meta = metadata();
    println!("{} v{} - {} entries", meta.name, meta.version, meta.total_technologies);

    let stats = statistics::statistics();
    println!("\nEntries per category:");
    for (category, count) in &stats.by_category {
        println!("  {category:<10} {count}");
    }

    if let Some(tech) = find_by_name("react") {
        println!("\nExact lookup \"react\" -> {} ({})", tech.name, tech.category);
    }

    println!("\nStacks:");
    for stack in categories::stacks() {
        let components = stack.components.as_deref().unwrap_or_default();
        let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        println!("  {} = {}", stack.name, names.join(" + "));
    }

    println!("\nFuzzy search \"Recat\":");
    let options = SearchOptions {
        max_results: 3,
        ..Default::default()
    };
    for hit in search_tech("Recat", &options) {
        println!("  {:<12} score {:.2}", hit.technology.name, hit.score);
    }

    println!("\nAutocomplete \"Postgre\" (databases only):");
    for tech in autocomplete("Postgre", 5, Some(&[TechnologyType::Database])) {
        println!("  {}", tech.name);
    }

    let criteria = FilterCriteria {
        categories: Some(vec![TechnologyType::Language]),
        name_contains: Some("script".into()),
        ..Default::default()
    };
    println!("\nLanguages containing \"script\":");
    for tech in filters::filter(&criteria) {
        println!("  {}", tech.name);
    }

    let report = validate::validate_catalog(technologies());
    println!(
        "\nCatalog validation: {} ({} errors, {} warnings)",
        if report.is_valid() { "ok" } else { "invalid" },
        report.errors.len(),
        report.warnings.len()
    );
}
