//! Word extraction: turning items and queries into indexable words.
//!
//! The search engine does not know anything about the items it indexes. It is
//! configured with a [`WordExtractor`], a deterministic mapping from an item
//! to the set of lowercase words that should make it findable. Any closure
//! `Fn(&T) -> WordSet` is an extractor.
//!
//! # Examples
//!
//! ```rust
//! use trie_autocomplete::words::{WordExtractor, WordSet, words_from_names};
//!
//! struct Exercise {
//!     name: String,
//!     aliases: Vec<String>,
//! }
//!
//! let extractor = |exercise: &Exercise| -> WordSet {
//!     words_from_names(std::iter::once(&exercise.name).chain(&exercise.aliases))
//! };
//!
//! let squat = Exercise {
//!     name: "Bulgarian Split Squat".to_string(),
//!     aliases: vec!["BSS".to_string()],
//! };
//!
//! let words = extractor.extract(&squat);
//! assert!(words.contains("bulgarian"));
//! assert!(words.contains("bss"));
//! assert_eq!(words.len(), 4);
//! ```

use std::collections::HashSet;

use smallvec::SmallVec;

/// A lowercase token produced by word extraction.
pub type Word = String;

/// A deduplicated set of words.
pub type WordSet = HashSet<Word>;

/// Search terms split out of a single query string.
///
/// Queries typed into a search box rarely have more than a handful of terms,
/// so they are kept inline.
pub type QueryTerms<'a> = SmallVec<[&'a str; 4]>;

/// Maps an item to the words it should be findable by.
///
/// Implementations must be deterministic: the same item always yields the
/// same words. The engine relies on this to find the words an item was
/// indexed under when the item is removed.
pub trait WordExtractor<T> {
    /// Returns the set of words for `item`.
    fn extract(&self, item: &T) -> WordSet;
}

impl<T, F> WordExtractor<T> for F
where
    F: Fn(&T) -> WordSet,
{
    #[inline]
    fn extract(&self, item: &T) -> WordSet {
        self(item)
    }
}

/// Lowercases every non-empty name and splits it on whitespace.
///
/// Empty names and empty tokens are discarded and duplicate tokens are
/// collapsed.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::words::words_from_names;
///
/// let words = words_from_names(["Pull Up", "", "chin  up"]);
/// let mut sorted: Vec<_> = words.into_iter().collect();
/// sorted.sort();
/// assert_eq!(sorted, vec!["chin", "pull", "up"]);
/// ```
pub fn words_from_names<I, S>(names: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|name| !name.as_ref().is_empty())
        .flat_map(|name| {
            name.as_ref()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Splits a search-box query into its non-empty terms.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::words::split_query;
///
/// assert_eq!(split_query("  lef   bul ").as_slice(), &["lef", "bul"]);
/// assert!(split_query("   ").is_empty());
/// ```
pub fn split_query(query: &str) -> QueryTerms<'_> {
    query.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted(words: WordSet) -> Vec<Word> {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort();
        words
    }

    #[rstest]
    #[case(&["Coder"], &["coder"])]
    #[case(&["Big cocoa"], &["big", "cocoa"])]
    #[case(&["left bulgarian squat", "LEFT BSS"], &["bss", "bulgarian", "left", "squat"])]
    #[case(&[""], &[])]
    #[case(&[" \t "], &[])]
    fn test_words_from_names(#[case] names: &[&str], #[case] expected: &[&str]) {
        assert_eq!(sorted(words_from_names(names)), expected);
    }

    #[rstest]
    fn test_closure_is_an_extractor() {
        let extractor = |name: &String| words_from_names([name]);
        let words = extractor.extract(&"Farmer Walk".to_string());
        assert_eq!(sorted(words), vec!["farmer", "walk"]);
    }

    #[rstest]
    fn test_split_query_keeps_case() {
        assert_eq!(split_query("CO ban").as_slice(), &["CO", "ban"]);
    }

    #[rstest]
    fn test_split_query_empty() {
        assert!(split_query("").is_empty());
    }
}
