// src/report.rs
use std::collections::{BTreeMap, HashSet};

/// Buckets a result set by word length. Words within each bucket are
/// sorted alphabetically so the rendered output is stable across runs.
pub fn group_by_length(results: &HashSet<String>) -> BTreeMap<usize, Vec<String>> {
    let mut grouped: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in results {
        grouped.entry(word.len()).or_default().push(word.clone());
    }
    for words in grouped.values_mut() {
        words.sort_unstable();
    }
    grouped
}

/// Renders the result set grouped by word length, longest group first.
///
/// Lengths run from the query's length down to 2; groups with no words
/// are omitted entirely, and single-letter words are never printed. No
/// result can exceed the query's length, so the query bounds the range.
pub fn render(query: &str, results: &HashSet<String>) -> String {
    let grouped = group_by_length(results);
    let mut out = String::new();

    for length in (2..=query.len()).rev() {
        if let Some(words) = grouped.get(&length) {
            out.push_str(&format!("{length}-LETTER SUBANAGRAMS: \n    "));
            out.push_str(&words.join(",  "));
            out.push_str("\n\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn groups_longest_first() {
        let rendered = render("cars", &results(&["arc", "car", "ac", "a"]));
        let pos3 = rendered.find("3-LETTER").unwrap();
        let pos2 = rendered.find("2-LETTER").unwrap();
        assert!(pos3 < pos2);
    }

    #[test]
    fn empty_groups_are_omitted() {
        let rendered = render("cars", &results(&["arc", "car"]));
        assert!(!rendered.contains("4-LETTER"));
        assert!(!rendered.contains("2-LETTER"));
        assert!(rendered.contains("3-LETTER"));
    }

    #[test]
    fn single_letter_words_are_not_printed() {
        let rendered = render("cars", &results(&["a"]));
        assert!(!rendered.contains("1-LETTER"));
        assert!(!rendered.contains('a'));
    }

    #[test]
    fn words_within_a_group_are_sorted() {
        let rendered = render("cars", &results(&["car", "arc"]));
        assert!(rendered.contains("arc,  car"));
    }

    #[test]
    fn empty_results_render_nothing() {
        assert!(render("cars", &HashSet::new()).is_empty());
    }
}
