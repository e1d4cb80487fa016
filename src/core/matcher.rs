// src/core/matcher.rs
use crate::core::index::SignatureIndex;
use crate::core::types::LetterVector;
use std::collections::HashSet;

/// Returns every indexed word formable from a sub-multiset of the query's
/// letters, excluding the query word itself.
///
/// The query is lowercased and vectorized fresh, then every signature in
/// the index is tested for dominance (candidate count <= query count in all
/// 26 slots) and the word sets of passing signatures are folded into one
/// owned result set. The query's own signature is scanned like any other,
/// so distinct exact anagrams of the query survive; only the literal query
/// word is removed at the end.
///
/// Total over any finite string: an empty query yields the empty set,
/// since no positive-length candidate is dominated by the zero vector.
/// O(unique signatures * 26) per call.
pub fn subanagrams(index: &SignatureIndex, query: &str) -> HashSet<String> {
    let query = query.to_lowercase();
    let query_vector = LetterVector::from_word(&query);

    let mut results: HashSet<String> = index
        .vectors
        .iter()
        .filter(|(_, candidate)| candidate.is_dominated_by(&query_vector))
        .fold(HashSet::new(), |mut acc, (signature, _)| {
            if let Some(words) = index.anagrams.get(signature) {
                acc.extend(words.iter().cloned());
            }
            acc
        });

    results.remove(query.as_str());
    results
}
