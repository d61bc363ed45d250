//! Catalog search and autocomplete.
//!
//! Fuzzy mode delegates to [`stackdex_search::best_matches`] over the
//! candidate names; substring mode is plain containment in catalog order
//! with a fixed score of `1.0`.
//!
//! Known quirk, kept for compatibility with the original catalog API:
//! [`stackdex_search::similarity`] folds case internally, so fuzzy search
//! is effectively case-insensitive even when
//! [`SearchOptions::case_sensitive`] is set. The flag only changes
//! substring mode.

use crate::catalog::technologies;
use crate::types::{
    FieldMatch, MatchedField, SearchHit, SearchOptions, Technology, TechnologyType,
};
use stackdex_search::{best_matches, DEFAULT_SCORE_THRESHOLD};
use tracing::debug;

/// Default result limit for [`search_tech`].
pub const DEFAULT_SEARCH_MAX_RESULTS: usize = 20;

/// Search the catalog for technologies matching a query.
///
/// Candidates are restricted to `options.categories` first (a `None` or
/// empty list applies no restriction), then matched fuzzily or by
/// substring containment per `options.fuzzy`. An empty result is the only
/// "no match" signal; semantically odd options (`max_results == 0`) clamp
/// to an empty result rather than failing.
///
/// # Example
/// ```
/// use stackdex_catalog::{search_tech, SearchOptions};
///
/// let hits = search_tech("Recat", &SearchOptions::default());
/// assert_eq!(hits[0].technology.name, "React");
/// assert!(hits[0].score < 1.0);
/// ```
pub fn search_tech(query: &str, options: &SearchOptions) -> Vec<SearchHit> {
    let candidates: Vec<&'static Technology> = match &options.categories {
        Some(categories) if !categories.is_empty() => technologies()
            .iter()
            .filter(|tech| categories.contains(&tech.category))
            .collect(),
        _ => technologies().iter().collect(),
    };
    let candidate_count = candidates.len();

    let normalized_query = if options.case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };

    let hits: Vec<SearchHit> = if options.fuzzy {
        best_matches(
            &normalized_query,
            candidates,
            |tech: &&'static Technology| {
                if options.case_sensitive {
                    tech.name.clone()
                } else {
                    tech.name.to_lowercase()
                }
            },
            options.max_results,
            DEFAULT_SCORE_THRESHOLD,
        )
        .into_iter()
        .map(|m| SearchHit {
            technology: m.item,
            score: m.score,
            matches: vec![FieldMatch {
                field: MatchedField::Name,
                value: m.item.name.clone(),
            }],
        })
        .collect()
    } else {
        candidates
            .into_iter()
            .filter(|tech| {
                let name = if options.case_sensitive {
                    tech.name.clone()
                } else {
                    tech.name.to_lowercase()
                };
                name.contains(&normalized_query)
            })
            .take(options.max_results)
            .map(|tech| SearchHit {
                technology: tech,
                // Substring mode does not rank by match quality, only by
                // presence and catalog order.
                score: 1.0,
                matches: vec![FieldMatch {
                    field: MatchedField::Name,
                    value: tech.name.clone(),
                }],
            })
            .collect()
    };

    debug!(
        query_len = query.len(),
        fuzzy = options.fuzzy,
        candidates = candidate_count,
        results = hits.len(),
        "catalog search completed"
    );

    hits
}

/// Fuzzy-search the catalog by name only.
///
/// Always case-folded, no category filter, threshold fixed at
/// [`DEFAULT_SCORE_THRESHOLD`]. Hits carry no field matches. The
/// conventional limit is [`stackdex_search::DEFAULT_MAX_RESULTS`].
///
/// # Example
/// ```
/// use stackdex_catalog::search_by_name;
///
/// let hits = search_by_name("JavaScript", 10);
/// assert_eq!(hits[0].technology.name, "JavaScript");
/// assert_eq!(hits[0].score, 1.0);
/// ```
pub fn search_by_name(name: &str, max_results: usize) -> Vec<SearchHit> {
    let hits: Vec<SearchHit> = best_matches(
        &name.to_lowercase(),
        technologies().iter(),
        |tech: &&'static Technology| tech.name.to_lowercase(),
        max_results,
        DEFAULT_SCORE_THRESHOLD,
    )
    .into_iter()
    .map(|m| SearchHit {
        technology: m.item,
        score: m.score,
        matches: Vec::new(),
    })
    .collect();

    debug!(
        query_len = name.len(),
        results = hits.len(),
        "name search completed"
    );

    hits
}

/// Suggest catalog entries for a partial input.
///
/// Thin projection over [`search_tech`]: always fuzzy, optionally
/// restricted to `filter` categories, scores stripped. Suggestions come
/// back in ranked order.
pub fn autocomplete(
    input: &str,
    max_suggestions: usize,
    filter: Option<&[TechnologyType]>,
) -> Vec<&'static Technology> {
    let options = SearchOptions {
        fuzzy: true,
        max_results: max_suggestions,
        categories: filter.map(|categories| categories.to_vec()),
        ..Default::default()
    };

    search_tech(input, &options)
        .into_iter()
        .map(|hit| hit.technology)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_name_scores_one() {
        let hits = search_by_name("JavaScript", 10);
        assert_eq!(hits[0].technology.name, "JavaScript");
        assert_eq!(hits[0].score, 1.0);
        assert!(hits[0].matches.is_empty());
    }

    #[test]
    fn test_typo_ranks_in_top_results() {
        let options = SearchOptions {
            max_results: 3,
            ..Default::default()
        };
        let hits = search_tech("Recat", &options);

        assert!(hits.len() <= 3);
        let react = hits
            .iter()
            .find(|hit| hit.technology.name == "React")
            .expect("React should rank in the top 3 for \"Recat\"");
        assert!(react.score > 0.3);
        assert!(react.score < 1.0);
    }

    #[test]
    fn test_hits_report_matched_field() {
        let hits = search_tech("React", &SearchOptions::default());
        assert_eq!(hits[0].matches.len(), 1);
        assert_eq!(hits[0].matches[0].field, MatchedField::Name);
        assert_eq!(hits[0].matches[0].value, "React");
    }

    #[test]
    fn test_scores_descending() {
        let hits = search_tech("Java", &SearchOptions::default());
        for window in hits.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn test_category_restriction() {
        let options = SearchOptions {
            categories: Some(vec![TechnologyType::Database]),
            ..Default::default()
        };
        let hits = search_tech("Java", &options);
        assert!(hits
            .iter()
            .all(|hit| hit.technology.category == TechnologyType::Database));
    }

    #[test]
    fn test_empty_category_list_is_no_restriction() {
        let unrestricted = search_tech("React", &SearchOptions::default());
        let options = SearchOptions {
            categories: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(search_tech("React", &options).len(), unrestricted.len());
    }

    #[test]
    fn test_substring_mode_catalog_order() {
        let options = SearchOptions {
            fuzzy: false,
            ..Default::default()
        };
        let hits = search_tech("script", &options);
        let names: Vec<&str> = hits.iter().map(|hit| hit.technology.name.as_str()).collect();

        assert_eq!(names, vec!["JavaScript", "TypeScript"]);
        assert!(hits.iter().all(|hit| hit.score == 1.0));
    }

    #[test]
    fn test_substring_case_sensitive_excludes() {
        // The catalog capitalizes names, so lowercase "java" has no
        // exact-case substring hit.
        let options = SearchOptions {
            fuzzy: false,
            case_sensitive: true,
            ..Default::default()
        };
        assert!(search_tech("java", &options).is_empty());
    }

    #[test]
    fn test_fuzzy_ignores_case_sensitive_flag() {
        let options = SearchOptions {
            case_sensitive: true,
            ..Default::default()
        };
        let hits = search_tech("REACT", &options);
        assert_eq!(hits[0].technology.name, "React");
        assert_eq!(hits[0].score, 1.0);
    }

    #[test]
    fn test_max_results_zero_is_empty() {
        let options = SearchOptions {
            max_results: 0,
            ..Default::default()
        };
        assert!(search_tech("React", &options).is_empty());

        let substring = SearchOptions {
            fuzzy: false,
            max_results: 0,
            ..Default::default()
        };
        assert!(search_tech("React", &substring).is_empty());
    }

    #[test]
    fn test_autocomplete_ranked_suggestions() {
        let suggestions = autocomplete("Postgre", 5, Some(&[TechnologyType::Database]));
        assert_eq!(suggestions[0].name, "PostgreSQL");
        assert!(suggestions
            .iter()
            .all(|tech| tech.category == TechnologyType::Database));
    }

    #[test]
    fn test_autocomplete_no_match_is_empty() {
        assert!(autocomplete("xyz123nonexistent456", 10, None).is_empty());
    }

    proptest! {
        #[test]
        fn prop_search_respects_limits(query in ".*", max_results in 0usize..30) {
            let options = SearchOptions {
                max_results,
                ..Default::default()
            };
            let hits = search_tech(&query, &options);

            prop_assert!(hits.len() <= max_results);
            for hit in &hits {
                prop_assert!(hit.score >= DEFAULT_SCORE_THRESHOLD);
                prop_assert!(hit.score <= 1.0);
            }
        }
    }
}
