//! The catalog: an owned collection kept in sync with a search engine.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use super::{CatalogError, Cataloged};
use crate::autocomplete::SearchEngine;
use crate::collections::ReferenceCounter;
use crate::words::{WordSet, split_query};

/// How the terms of a search query combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchMode {
    /// An item matches when any term matches one of its words.
    #[default]
    Any,
    /// An item matches when every term matches one of its words.
    All,
}

/// Runtime configuration of a [`Catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogConfig {
    /// How query terms combine in [`Catalog::search_by_prefix`].
    pub match_mode: MatchMode,
}

type Handle<T> = ReferenceCounter<T>;

fn handle_words<T: Cataloged>(item: &Handle<T>) -> WordSet {
    item.words()
}

/// A stored item and the position it was first inserted at.
struct Entry<T> {
    handle: Handle<T>,
    sequence: u64,
}

/// Owns items by identifier and keeps them searchable.
///
/// Every mutation is mirrored into a [`SearchEngine`] incrementally, so a
/// search never needs to re-index the whole catalog. Items are shared with
/// the engine through [`ReferenceCounter`] handles rather than cloned.
///
/// Listings are sorted by name, ignoring case; items with the same name keep
/// the order their identifiers were first inserted in.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::catalog::{Activity, Catalog};
///
/// let mut catalog = Catalog::default();
/// catalog.initialize([
///     Activity::new("act_1", "Left bulgarian squat"),
///     Activity::new("act_2", "Right bulgarian squat"),
///     Activity::new("act_3", "Deadlift"),
/// ]);
///
/// let names: Vec<&str> = catalog
///     .search_by_prefix("bul")
///     .into_iter()
///     .map(|activity| activity.name.as_str())
///     .collect();
/// assert_eq!(names, vec!["Left bulgarian squat", "Right bulgarian squat"]);
///
/// catalog.delete(&"act_1".to_string()).unwrap();
/// assert_eq!(catalog.search_by_prefix("left").len(), 0);
/// ```
pub struct Catalog<T: Cataloged> {
    items: HashMap<T::Id, Entry<T>>,
    next_sequence: u64,
    engine: SearchEngine<Handle<T>, fn(&Handle<T>) -> WordSet>,
    config: CatalogConfig,
}

impl<T: Cataloged> Catalog<T> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            items: HashMap::new(),
            next_sequence: 0,
            engine: SearchEngine::new(handle_words::<T> as fn(&Handle<T>) -> WordSet),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog holds no item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the content of the catalog with `items`.
    ///
    /// When several items share an identifier the last one wins, at the
    /// position of the first.
    pub fn initialize<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.clear();
        self.next_sequence = 0;
        for item in items {
            let handle = Handle::new(item);
            match self.items.get_mut(handle.id()) {
                Some(entry) => entry.handle = handle,
                None => self.insert_entry(handle),
            }
        }
        self.engine
            .initialize(self.items.values().map(|entry| Handle::clone(&entry.handle)));
        debug!(target: "trie_autocomplete::catalog", items = self.items.len(), "initialized catalog");
    }

    /// Returns the item with identifier `id`.
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id).map(|entry| entry.handle.as_ref())
    }

    /// Adds a new item.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if an item with the same
    /// identifier exists; the catalog is left unchanged.
    pub fn add(&mut self, item: T) -> Result<(), CatalogError> {
        let id = item.id().clone();
        if self.items.contains_key(&id) {
            warn!(target: "trie_autocomplete::catalog", %id, "refusing to add duplicate item");
            return Err(CatalogError::duplicate_id(&id));
        }

        let handle = Handle::new(item);
        self.engine.add_item(Handle::clone(&handle));
        self.insert_entry(handle);
        debug!(target: "trie_autocomplete::catalog", %id, "added item");
        Ok(())
    }

    /// Replaces the item sharing `item`'s identifier and re-indexes it.
    ///
    /// The item keeps its insertion position. Returns the previous version.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no item has that identifier;
    /// the catalog is left unchanged.
    pub fn update(&mut self, item: T) -> Result<ReferenceCounter<T>, CatalogError> {
        let id = item.id().clone();
        let Some(entry) = self.items.get_mut(&id) else {
            warn!(target: "trie_autocomplete::catalog", %id, "nothing to update");
            return Err(CatalogError::not_found(&id));
        };

        let handle = Handle::new(item);
        let previous = std::mem::replace(&mut entry.handle, Handle::clone(&handle));
        self.engine.remove_item(&previous);
        self.engine.add_item(handle);
        debug!(target: "trie_autocomplete::catalog", %id, "updated item");
        Ok(previous)
    }

    /// Removes the item with identifier `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no item has that identifier.
    pub fn delete(&mut self, id: &T::Id) -> Result<ReferenceCounter<T>, CatalogError> {
        let Some(Entry {
            handle: previous, ..
        }) = self.items.remove(id)
        else {
            warn!(target: "trie_autocomplete::catalog", %id, "nothing to delete");
            return Err(CatalogError::not_found(id));
        };

        self.engine.remove_item(&previous);
        debug!(target: "trie_autocomplete::catalog", %id, "deleted item");
        Ok(previous)
    }

    /// Every item, sorted alphabetically by name, ignoring case, then by
    /// insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<&T> {
        Self::sorted(self.items.values())
    }

    /// Items matching the search-box `query`, sorted like [`Catalog::all`].
    ///
    /// The query is split on whitespace; its terms combine according to the
    /// configured [`MatchMode`]. A query without terms returns every item.
    #[must_use]
    pub fn search_by_prefix(&self, query: &str) -> Vec<&T> {
        let terms = split_query(query);
        if terms.is_empty() {
            return self.all();
        }

        let matched = match self.config.match_mode {
            MatchMode::Any => self.engine.search_any(&terms),
            MatchMode::All => self.engine.search_all(&terms),
        };
        Self::sorted(
            self.items
                .values()
                .filter(|entry| matched.contains(&entry.handle)),
        )
    }

    fn insert_entry(&mut self, handle: Handle<T>) {
        let entry = Entry {
            sequence: self.next_sequence,
            handle,
        };
        self.next_sequence += 1;
        self.items.insert(entry.handle.id().clone(), entry);
    }

    fn sorted<'a, I>(entries: I) -> Vec<&'a T>
    where
        I: Iterator<Item = &'a Entry<T>>,
        T: 'a,
    {
        let mut entries: Vec<&Entry<T>> = entries.collect();
        entries.sort_by_cached_key(|entry| {
            (entry.handle.name().to_lowercase(), entry.sequence)
        });
        entries
            .into_iter()
            .map(|entry| entry.handle.as_ref())
            .collect()
    }
}

impl<T: Cataloged> Default for Catalog<T> {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl<T: Cataloged> fmt::Debug for Catalog<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Catalog")
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("engine", &self.engine)
            .finish()
    }
}
