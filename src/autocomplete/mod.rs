//! Search-as-you-type over a mutable item collection.
//!
//! This module composes the [`Trie`](crate::trie::Trie), a caller-supplied
//! [`WordExtractor`](crate::words::WordExtractor) and an internal word → items
//! index into search engines that stay consistent as items are added and
//! removed:
//!
//! - [`Autocompleter`]: several prefixes, OR-ed together
//! - [`AutocompleterV2`]: one query string whose terms are AND-ed together
//! - [`SearchEngine`]: the shared core, offering both query styles
//! - [`naive::filter_by_query`]: the rebuild-on-every-query predecessor
//!
//! # Lifecycle
//!
//! A collaborator owning a collection calls `initialize` once with every
//! item, then `add_item`/`remove_item` whenever the collection changes, and
//! `search` on every keystroke. All calls are synchronous; a search always
//! reflects every mutation applied before it.
//!
//! # Examples
//!
//! ```rust
//! use trie_autocomplete::autocomplete::{Autocompleter, AutocompleterV2};
//! use trie_autocomplete::words::{WordSet, words_from_names};
//!
//! let extractor = |name: &&str| -> WordSet { words_from_names([*name]) };
//! let exercises = ["left bulgarian squat", "right bulgarian squat"];
//!
//! let mut any = Autocompleter::new(extractor);
//! any.initialize(exercises);
//! assert_eq!(any.search(["lef", "bul"]).len(), 2);
//!
//! let mut all = AutocompleterV2::new(extractor);
//! all.initialize(exercises);
//! assert_eq!(all.search("lef bul").len(), 1);
//! ```

mod engine;
pub mod naive;
mod prefix;
mod query;

pub use engine::SearchEngine;
pub use prefix::Autocompleter;
pub use query::AutocompleterV2;
