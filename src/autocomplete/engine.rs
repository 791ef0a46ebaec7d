//! The trie + word index core shared by both autocompleters.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::collections::IndexSet;
use crate::index::WordIndex;
use crate::trie::Trie;
use crate::words::WordExtractor;

/// Owns a [`Trie`], the word → items index and the item set, and keeps the
/// three consistent as items come and go.
///
/// Every word stored in the trie is indexed under at least one item, and
/// every indexed word is stored in the trie. Mutations are applied in place,
/// so each call costs time proportional to the item's words rather than to
/// the whole collection.
///
/// [`Autocompleter`](super::Autocompleter) and
/// [`AutocompleterV2`](super::AutocompleterV2) are thin query front-ends over
/// this type; use it directly when both query styles are needed.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::autocomplete::SearchEngine;
/// use trie_autocomplete::words::{WordSet, words_from_names};
///
/// let mut engine = SearchEngine::new(|name: &&str| -> WordSet { words_from_names([*name]) });
/// engine.initialize(["left bulgarian squat", "right bulgarian squat"]);
///
/// assert_eq!(engine.search_any(["lef", "rig"]).len(), 2);
/// assert_eq!(engine.search_all(["lef", "bul"]).len(), 1);
/// ```
#[derive(Clone)]
pub struct SearchEngine<T, E> {
    trie: Trie,
    index: WordIndex<T>,
    items: IndexSet<T>,
    extractor: E,
}

impl<T, E> SearchEngine<T, E> {
    /// Creates an empty engine that extracts words with `extractor`.
    #[must_use]
    pub fn new(extractor: E) -> Self {
        Self {
            trie: Trie::new(),
            index: WordIndex::new(),
            items: IndexSet::default(),
            extractor,
        }
    }

    /// Returns the number of indexed items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no item is indexed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct indexed words.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.index.word_count()
    }

    /// Returns the trie of indexed words.
    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl<T, E> SearchEngine<T, E>
where
    T: Clone + Eq + Hash,
    E: WordExtractor<T>,
{
    /// Replaces the indexed items with `items`, rebuilding the index and the
    /// trie from scratch.
    pub fn initialize<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let items: IndexSet<T> = items.into_iter().collect();
        let (words, index) = WordIndex::analyze(&items, &self.extractor);

        self.trie = Trie::build(&words);
        self.index = index;
        self.items = items;

        debug!(
            target: "trie_autocomplete::engine",
            items = self.items.len(),
            words = self.trie.len(),
            "initialized search index"
        );
    }

    /// Makes `item` searchable.
    ///
    /// Only words no other item has introduced are added to the trie.
    /// Returns `false` if the item was already indexed.
    pub fn add_item(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }

        let words = self.extractor.extract(&item);
        let introduced = self.index.insert_item(&item, &words);
        self.trie.extend(&introduced);
        self.items.insert(item);

        debug!(
            target: "trie_autocomplete::engine",
            words = words.len(),
            introduced = introduced.len(),
            "added item"
        );
        true
    }

    /// Stops `item` from being searchable.
    ///
    /// Words no remaining item maps to are removed from the trie. Returns
    /// `false`, and changes nothing, if the item was not indexed.
    pub fn remove_item(&mut self, item: &T) -> bool {
        if !self.items.remove(item) {
            return false;
        }

        let words = self.extractor.extract(item);
        let emptied = self.index.remove_item(item, &words);
        for word in &emptied {
            self.trie.remove(word);
        }

        debug!(
            target: "trie_autocomplete::engine",
            words = words.len(),
            emptied = emptied.len(),
            "removed item"
        );
        true
    }

    /// Returns `true` if `item` is indexed.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Items having at least one word that starts with `prefix`.
    ///
    /// The prefix is lowercased before the lookup.
    #[must_use]
    pub fn matching(&self, prefix: &str) -> HashSet<T> {
        let words = self.trie.find_words(&prefix.to_lowercase());
        trace!(
            target: "trie_autocomplete::engine",
            prefix,
            words = words.len(),
            "resolved prefix"
        );
        self.index.items_for(&words)
    }

    /// Items matching any of `prefixes`.
    ///
    /// An empty list of prefixes matches nothing.
    #[must_use]
    pub fn search_any<I, S>(&self, prefixes: I) -> HashSet<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        prefixes
            .into_iter()
            .flat_map(|prefix| self.matching(prefix.as_ref()))
            .collect()
    }

    /// Items matching every one of `terms`.
    ///
    /// Each term may be satisfied by a different word of the item. An empty
    /// list of terms matches nothing.
    #[must_use]
    pub fn search_all<I, S>(&self, terms: I) -> HashSet<T>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms = terms.into_iter();
        let Some(first) = terms.next() else {
            return HashSet::new();
        };

        let mut results = self.matching(first.as_ref());
        for term in terms {
            if results.is_empty() {
                break;
            }
            let matches = self.matching(term.as_ref());
            results.retain(|item| matches.contains(item));
        }
        results
    }
}

impl<T, E> fmt::Debug for SearchEngine<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SearchEngine")
            .field("items", &self.items.len())
            .field("words", &self.index.word_count())
            .finish_non_exhaustive()
    }
}
