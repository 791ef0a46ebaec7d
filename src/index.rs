//! Inverted index from words to the items containing them.
//!
//! [`WordIndex`] is owned by the search engine and never exposed. It keeps one
//! invariant: a word is a key if and only if at least one indexed item maps
//! to it. Removing the last item of a word deletes the word's entry and hands
//! the word back to the caller so it can be dropped from the trie as well.

use std::collections::HashSet;
use std::hash::Hash;

use crate::collections::{IndexMap, IndexSet};
use crate::words::{Word, WordExtractor, WordSet};

/// Word → items mapping with incremental maintenance.
#[derive(Clone)]
pub(crate) struct WordIndex<T> {
    entries: IndexMap<Word, IndexSet<T>>,
}

impl<T> WordIndex<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }

    /// Number of distinct indexed words.
    pub(crate) fn word_count(&self) -> usize {
        self.entries.len()
    }
}

impl<T: Clone + Eq + Hash> WordIndex<T> {
    /// Indexes a batch of items from scratch.
    ///
    /// Returns every word produced by the batch alongside the index.
    pub(crate) fn analyze<'a, I, E>(items: I, extractor: &E) -> (WordSet, Self)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
        E: WordExtractor<T>,
    {
        let mut index = Self::new();
        let mut all_words = WordSet::new();
        for item in items {
            let words = extractor.extract(item);
            index.insert_item(item, &words);
            all_words.extend(words);
        }
        (all_words, index)
    }

    /// Adds `item` under each of `words`.
    ///
    /// Returns the words that had no entry before this call.
    pub(crate) fn insert_item(&mut self, item: &T, words: &WordSet) -> Vec<Word> {
        let mut introduced = Vec::new();
        for word in words {
            let items = self.entries.entry(word.clone()).or_insert_with(|| {
                introduced.push(word.clone());
                IndexSet::default()
            });
            items.insert(item.clone());
        }
        introduced
    }

    /// Removes `item` from each of `words`.
    ///
    /// Entries left without items are deleted; their words are returned.
    pub(crate) fn remove_item(&mut self, item: &T, words: &WordSet) -> Vec<Word> {
        let mut emptied = Vec::new();
        for word in words {
            let Some(items) = self.entries.get_mut(word) else {
                continue;
            };
            if items.remove(item) && items.is_empty() {
                self.entries.remove(word);
                emptied.push(word.clone());
            }
        }
        emptied
    }

    /// Union of the items indexed under any of `words`.
    pub(crate) fn items_for<'a, I>(&self, words: I) -> HashSet<T>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        words
            .into_iter()
            .filter_map(|word| self.entries.get(word))
            .flatten()
            .cloned()
            .collect()
    }

    #[cfg(test)]
    fn items_of(&self, word: &str) -> Option<&IndexSet<T>> {
        self.entries.get(word)
    }
}
