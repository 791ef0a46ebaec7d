//! Autocompletion where every term of a query must match.

use std::collections::HashSet;
use std::hash::Hash;

use super::SearchEngine;
use crate::words::{WordExtractor, split_query};

/// Prefix search over a mutable collection, where spaces in the query act
/// as AND operators.
///
/// The query is split on whitespace into terms. An item matches when, for
/// every term, at least one of its words starts with that term. Different
/// terms may be satisfied by the same word.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::autocomplete::AutocompleterV2;
/// use trie_autocomplete::words::{WordSet, words_from_names};
///
/// let mut completer = AutocompleterV2::new(|name: &&str| -> WordSet { words_from_names([*name]) });
/// completer.initialize(["left bulgarian squat", "right bulgarian squat"]);
///
/// assert_eq!(completer.search("bul").len(), 2);
/// assert_eq!(
///     completer.search("lef bul").into_iter().collect::<Vec<_>>(),
///     vec!["left bulgarian squat"]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct AutocompleterV2<T, E> {
    engine: SearchEngine<T, E>,
}

impl<T, E> AutocompleterV2<T, E> {
    /// Creates an empty autocompleter that extracts words with `extractor`.
    #[must_use]
    pub fn new(extractor: E) -> Self {
        Self {
            engine: SearchEngine::new(extractor),
        }
    }

    /// Returns the number of searchable items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Returns `true` if no item is searchable.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Returns the number of distinct indexed words.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.engine.word_count()
    }
}

impl<T, E> AutocompleterV2<T, E>
where
    T: Clone + Eq + Hash,
    E: WordExtractor<T>,
{
    /// Replaces the searchable items with `items`.
    pub fn initialize<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.engine.initialize(items);
    }

    /// Makes `item` searchable without rebuilding the index.
    pub fn add_item(&mut self, item: T) -> bool {
        self.engine.add_item(item)
    }

    /// Stops `item` from being searchable. Unknown items are ignored.
    pub fn remove_item(&mut self, item: &T) -> bool {
        self.engine.remove_item(item)
    }

    /// Returns `true` if `item` is searchable.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.engine.contains(item)
    }

    /// Items matching every whitespace-separated term of `query`.
    ///
    /// Terms are compared case-insensitively. A query without terms matches
    /// nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> HashSet<T> {
        self.engine.search_all(split_query(query))
    }
}
