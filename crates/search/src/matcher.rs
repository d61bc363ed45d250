//! Generic ranked matching over arbitrary items.

use crate::fuzzy::similarity;
use serde::{Deserialize, Serialize};

/// Conventional maximum number of ranked results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Conventional minimum score for a ranked result.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.3;

/// A ranked item with its similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match<T> {
    /// The matched item
    pub item: T,
    /// Similarity score in `[0, 1]` (higher is better)
    pub score: f64,
}

/// Rank items by similarity to a query string.
///
/// Scores every item via [`similarity`] against the string produced by
/// `project`, keeps items scoring at least `threshold`, sorts descending by
/// score, and truncates to `max_results`. The sort is stable: items with
/// equal scores keep their relative order from the input sequence.
///
/// # Arguments
/// * `query` - Query string
/// * `items` - Candidate items
/// * `project` - Extracts the comparison string from an item
/// * `max_results` - Maximum number of results, typically
///   [`DEFAULT_MAX_RESULTS`]; `0` yields an empty result
/// * `threshold` - Minimum score, typically [`DEFAULT_SCORE_THRESHOLD`];
///   values above `1.0` yield an empty result
///
/// # Returns
/// Ranked matches, best first
///
/// # Example
/// ```
/// use stackdex_search::best_matches;
///
/// let items = vec!["React", "Redux", "Vue.js"];
/// let ranked = best_matches("Recat", items, |s| s.to_string(), 10, 0.3);
///
/// assert_eq!(ranked[0].item, "React");
/// ```
pub fn best_matches<T, F>(
    query: &str,
    items: impl IntoIterator<Item = T>,
    project: F,
    max_results: usize,
    threshold: f64,
) -> Vec<Match<T>>
where
    F: Fn(&T) -> String,
{
    if max_results == 0 {
        return Vec::new();
    }

    let mut matches: Vec<Match<T>> = items
        .into_iter()
        .map(|item| {
            let score = similarity(query, &project(&item));
            Match { item, score }
        })
        .filter(|m| m.score >= threshold)
        .collect();

    // sort_by is stable, so equal scores preserve input order. Scores are
    // never NaN, total_cmp just sidesteps the partial_cmp unwrap.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(max_results);

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names() -> Vec<&'static str> {
        vec!["React", "Redux", "Ruby", "Rust", "Vue.js", "Svelte"]
    }

    fn project(s: &&str) -> String {
        s.to_string()
    }

    #[test]
    fn test_best_match_first() {
        let ranked = best_matches("Reactt", names(), project, 10, 0.3);
        assert_eq!(ranked[0].item, "React");
    }

    #[test]
    fn test_scores_descending() {
        let ranked = best_matches("Re", names(), project, 10, 0.0);
        for window in ranked.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn test_threshold_filters() {
        let ranked = best_matches("React", names(), project, 10, 0.5);
        assert!(ranked.iter().all(|m| m.score >= 0.5));
    }

    #[test]
    fn test_max_results_truncates() {
        let ranked = best_matches("R", names(), project, 2, 0.0);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_max_results_zero() {
        assert!(best_matches("React", names(), project, 0, 0.0).is_empty());
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<&str> = vec![];
        assert!(best_matches("React", items, project, 10, 0.0).is_empty());
    }

    #[test]
    fn test_threshold_above_one() {
        assert!(best_matches("React", names(), project, 10, 1.1).is_empty());
    }

    #[test]
    fn test_threshold_exactly_one_keeps_identical() {
        let ranked = best_matches("react", names(), project, 10, 1.0);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item, "React");
        assert_eq!(ranked[0].score, 1.0);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        // All items are pairwise disjoint from the query and same length,
        // so every score is 0.0 and the input order must survive.
        let items = vec!["aaa", "bbb", "ccc", "ddd"];
        let ranked = best_matches("xyz", items, project, 10, 0.0);
        let order: Vec<&str> = ranked.into_iter().map(|m| m.item).collect();
        assert_eq!(order, vec!["aaa", "bbb", "ccc", "ddd"]);
    }

    #[test]
    fn test_generic_projection() {
        struct Entry {
            name: String,
            id: u32,
        }

        let items = vec![
            Entry { name: "PostgreSQL".into(), id: 1 },
            Entry { name: "MySQL".into(), id: 2 },
        ];

        let ranked = best_matches("postgres", items, |e: &Entry| e.name.clone(), 10, 0.3);
        assert_eq!(ranked[0].item.id, 1);
    }

    proptest! {
        #[test]
        fn prop_output_invariants(
            query in ".*",
            items in proptest::collection::vec(".*", 0..30),
            max_results in 0usize..20,
            threshold in 0.0f64..1.0,
        ) {
            let ranked = best_matches(&query, items, |s: &String| s.clone(), max_results, threshold);

            prop_assert!(ranked.len() <= max_results);
            for m in &ranked {
                prop_assert!(m.score >= threshold);
            }
            for window in ranked.windows(2) {
                prop_assert!(window[0].score >= window[1].score);
            }
        }
    }
}
