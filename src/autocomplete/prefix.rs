//! Autocompletion where any of several prefixes may match.

use std::collections::HashSet;
use std::hash::Hash;

use super::SearchEngine;
use crate::words::WordExtractor;

/// Prefix search over a mutable collection, OR-ing the prefixes together.
///
/// The caller splits the text typed into a search box and passes every
/// chunk as a separate prefix. An item matches when any of its words starts
/// with any of the prefixes, case-insensitively.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::autocomplete::Autocompleter;
/// use trie_autocomplete::words::{WordSet, words_from_names};
///
/// let mut completer = Autocompleter::new(|name: &&str| -> WordSet { words_from_names([*name]) });
/// completer.initialize(["Coder", "Code", "Cocoa", "Banana"]);
///
/// let matched = completer.search(["cod", "BAN"]);
/// assert_eq!(matched.len(), 3);
/// assert!(matched.contains("Banana"));
/// assert!(!matched.contains("Cocoa"));
///
/// completer.remove_item(&"Banana");
/// assert!(completer.search(["ban"]).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Autocompleter<T, E> {
    engine: SearchEngine<T, E>,
}

impl<T, E> Autocompleter<T, E> {
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

impl<T, E> Autocompleter<T, E>
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
    ///
    /// Returns `false` if the item was already searchable.
    pub fn add_item(&mut self, item: T) -> bool {
        self.engine.add_item(item)
    }

    /// Stops `item` from being searchable. Unknown items are ignored.
    ///
    /// Returns `false` if the item was not searchable.
    pub fn remove_item(&mut self, item: &T) -> bool {
        self.engine.remove_item(item)
    }

    /// Returns `true` if `item` is searchable.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.engine.contains(item)
    }

    /// Items having a word that starts with any of `prefixes`.
    ///
    /// Prefixes are compared case-insensitively and a prefix equal to a whole
    /// word matches it. Each item appears once however many prefixes match
    /// it. No prefixes means no matches; an empty-string prefix matches every
    /// item that has at least one word.
    #[must_use]
    pub fn search<I, S>(&self, prefixes: I) -> HashSet<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.engine.search_any(prefixes)
    }
}
