//! # trie-autocomplete
//!
//! Incremental prefix search (autocomplete) over a mutable collection of
//! items, built on a character trie and a word → items inverted index.
//!
//! ## Overview
//!
//! The crate powers search-as-you-type boxes: as the user types, every item
//! having a word that starts with what was typed is returned. Items are
//! added and removed over the lifetime of the application, and the index is
//! kept consistent without rebuilding it. It includes:
//!
//! - **Trie**: prefix tree with in-place and non-mutating (clone-based)
//!   insertion and removal
//! - **Word Extraction**: a pluggable item → words mapping
//! - **Autocompleters**: OR-over-prefixes and AND-over-terms search engines
//! - **Catalog**: an owned collection of activities or trainables kept in
//!   sync with a search engine
//!
//! ## Feature Flags
//!
//! - `catalog` (default): domain collaborators (`Activity`, `Trainable`, `Catalog`)
//! - `serde`: `Serialize`/`Deserialize` for the trie and catalog types
//! - `fxhash`: use `FxHash` for the internal hash maps
//! - `arc`: share catalog items through `Arc` instead of `Rc`
//! - `full`: `catalog` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use trie_autocomplete::prelude::*;
//!
//! let mut completer = Autocompleter::new(|name: &&str| -> WordSet { words_from_names([*name]) });
//! completer.initialize(["Coder", "Code", "Cocoa", "Banana"]);
//!
//! assert_eq!(completer.search(["CO"]).len(), 3);
//!
//! completer.add_item("Cold shower");
//! assert_eq!(completer.search(["col"]).len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use trie_autocomplete::prelude::*;
/// ```
pub mod prelude {
    pub use crate::autocomplete::{Autocompleter, AutocompleterV2, SearchEngine};
    pub use crate::trie::{Trie, TrieNode};
    pub use crate::words::{Word, WordExtractor, WordSet, split_query, words_from_names};

    #[cfg(feature = "catalog")]
    pub use crate::catalog::*;
}

mod collections;
mod index;

pub mod autocomplete;
pub mod trie;
pub mod words;

#[cfg(feature = "catalog")]
pub mod catalog;

pub use collections::ReferenceCounter;
