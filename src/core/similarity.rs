use crate::core::categories::{normalize_text, CategorySet};

/// Minimum token length (exclusive) for a seeker word to count as a keyword hit
const MIN_TOKEN_LEN: usize = 2;

/// Number of keyword hits that saturates the direct overlap score
const HITS_FOR_FULL_SCORE: f64 = 3.0;

/// Jaccard index between two category sets (0-1)
///
/// Two empty sets have similarity 0.
#[inline]
pub fn jaccard_similarity(a: &CategorySet<'_>, b: &CategorySet<'_>) -> f64 {
    let union = a.union_len(b);
    if union == 0 {
        return 0.0;
    }

    a.intersection_len(b) as f64 / union as f64
}

/// Direct keyword overlap between seeker texts and one candidate text (0-1)
///
/// Each seeker text is split on whitespace; every token longer than two
/// characters that occurs inside the lower-cased candidate text counts as one
/// hit. Three hits or more give a full score. Seeker terms are searched in the
/// candidate text, never the other way round.
pub fn keyword_overlap<I, S>(seeker_texts: I, candidate_text: &str) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let haystack = normalize_text(candidate_text);
    let mut hits = 0usize;

    for text in seeker_texts {
        let normalized = normalize_text(text.as_ref());
        hits += normalized
            .split_whitespace()
            .filter(|word| word.chars().count() > MIN_TOKEN_LEN && haystack.contains(word))
            .count();
    }

    (hits as f64 / HITS_FOR_FULL_SCORE).min(1.0)
}
