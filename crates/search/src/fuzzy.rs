//! Similarity scoring based on Levenshtein edit distance.

use unicode_segmentation::UnicodeSegmentation;

/// Conventional threshold for a yes/no fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Calculate Levenshtein edit distance between two strings.
///
/// Text elements are Unicode grapheme clusters; for ASCII input this is
/// identical to per-char iteration. Input is compared as given, with no
/// case folding.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character insertions, deletions, or substitutions
/// needed to transform `a` into `b`
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_graphemes: Vec<&str> = a.graphemes(true).collect();
    let b_graphemes: Vec<&str> = b.graphemes(true).collect();

    let m = a_graphemes.len();
    let n = b_graphemes.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_graphemes[i - 1] == b_graphemes[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate a normalized similarity score between two strings.
///
/// Both inputs are case-folded before the distance computation, so the
/// score is case-insensitive. The score is `1 - distance / max_len` where
/// `max_len` is the longer string's grapheme count.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Score in `[0, 1]`; exactly `1.0` iff the case-folded strings are
/// identical (two empty strings score `1.0`)
///
/// # Example
/// ```
/// use stackdex_search::similarity;
///
/// assert_eq!(similarity("React", "react"), 1.0);
/// assert!(similarity("cat", "cats") > similarity("cat", "xyz"));
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_folded = a.to_lowercase();
    let b_folded = b.to_lowercase();

    // Fast path: identical strings score exactly 1.0, never an
    // approximation, so a threshold of 1.0 cannot exclude them.
    // Also covers the both-empty case.
    if a_folded == b_folded {
        return 1.0;
    }

    let max_len = a_folded
        .graphemes(true)
        .count()
        .max(b_folded.graphemes(true).count());
    let distance = levenshtein_distance(&a_folded, &b_folded);

    1.0 - distance as f64 / max_len as f64
}

/// Check whether a search term fuzzy-matches a target string.
///
/// # Arguments
/// * `term` - Search term
/// * `target` - Target string
/// * `threshold` - Minimum similarity score, typically
///   [`DEFAULT_FUZZY_THRESHOLD`]
///
/// # Returns
/// true if `similarity(term, target) >= threshold`
pub fn fuzzy_match(term: &str, target: &str, threshold: f64) -> bool {
    similarity(term, target) >= threshold
}
