//! Rebuild-per-query filtering.
//!
//! The first generation of the search box built a fresh trie and word index
//! over the whole collection on every keystroke. It is kept because it is
//! trivially correct: the incremental engine is tested against it, and the
//! benchmarks measure how much the incremental engine saves.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::trace;

use crate::index::WordIndex;
use crate::trie::Trie;
use crate::words::{WordExtractor, split_query};

/// Filters `items` down to those matching any term of `query`.
///
/// A query without terms keeps every item. The relative order of `items` is
/// preserved.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::autocomplete::naive::filter_by_query;
/// use trie_autocomplete::words::{WordSet, words_from_names};
///
/// let items = ["Coder", "Code", "Cocoa", "Banana"];
/// let extractor = |name: &&str| -> WordSet { words_from_names([*name]) };
///
/// assert_eq!(filter_by_query(&items, "cod ban", &extractor), vec![&"Coder", &"Code", &"Banana"]);
/// assert_eq!(filter_by_query(&items, " ", &extractor).len(), 4);
/// ```
pub fn filter_by_query<'a, T, E>(items: &'a [T], query: &str, extractor: &E) -> Vec<&'a T>
where
    T: Clone + Eq + Hash,
    E: WordExtractor<T>,
{
    let prefixes = split_query(query);
    if prefixes.is_empty() {
        return items.iter().collect();
    }

    let (words, index) = WordIndex::analyze(items, extractor);
    let trie = Trie::build(&words);
    trace!(
        target: "trie_autocomplete::naive",
        items = items.len(),
        words = trie.len(),
        "rebuilt index for query"
    );

    let matched: HashSet<T> = prefixes
        .iter()
        .flat_map(|prefix| index.items_for(&trie.find_words(&prefix.to_lowercase())))
        .collect();

    items.iter().filter(|item| matched.contains(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::{WordSet, words_from_names};
    use rstest::rstest;

    fn name_words(name: &&'static str) -> WordSet {
        words_from_names([*name])
    }

    const ITEMS: [&str; 4] = ["Coder", "Big cocoa", "Banana", "Code"];

    #[rstest]
    #[case("co", &["Coder", "Big cocoa", "Code"])]
    #[case("BIG", &["Big cocoa"])]
    #[case("ban cod", &["Coder", "Banana", "Code"])]
    #[case("xyz", &[])]
    #[case("", &["Coder", "Big cocoa", "Banana", "Code"])]
    fn test_filter_by_query(#[case] query: &str, #[case] expected: &[&str]) {
        let filtered: Vec<&str> = filter_by_query(&ITEMS, query, &name_words)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(filtered, expected);
    }
}
