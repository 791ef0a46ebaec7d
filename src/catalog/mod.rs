//! Searchable collections of fitness entities.
//!
//! This module provides the collaborators that own the user's items and keep
//! a [`SearchEngine`](crate::autocomplete::SearchEngine) consistent with them:
//!
//! - [`Activity`] and [`Trainable`]: the searchable entities, with their word
//!   mappers [`activity_words`] and [`trainable_words`]
//! - [`Cataloged`]: what any other entity needs to provide to be cataloged
//! - [`Catalog`]: CRUD over items by identifier plus search-box queries,
//!   configured by [`CatalogConfig`]
//!
//! # Examples
//!
//! ```rust
//! use trie_autocomplete::catalog::{Catalog, CatalogConfig, CatalogError, MatchMode, Trainable};
//!
//! let mut catalog = Catalog::new(CatalogConfig { match_mode: MatchMode::All });
//! catalog.add(Trainable::new("imp_1", "Grip strength")).unwrap();
//! catalog.add(Trainable::new("imp_2", "Core strength")).unwrap();
//!
//! assert_eq!(catalog.search_by_prefix("str").len(), 2);
//! assert_eq!(catalog.search_by_prefix("str gri").len(), 1);
//!
//! let error = catalog.add(Trainable::new("imp_1", "Balance")).unwrap_err();
//! assert_eq!(error, CatalogError::DuplicateId { id: "imp_1".to_string() });
//! ```

mod domain;
mod error;
mod store;

pub use domain::{
    Activity, ActivityId, Cataloged, Trainable, TrainableId, activity_words, trainable_words,
};
pub use error::CatalogError;
pub use store::{Catalog, CatalogConfig, MatchMode};

// Catalogs share items with their engine through reference-counted handles,
// so they only cross threads when those handles are `Arc`.
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Catalog<Activity>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Catalog<Activity>: Send, Sync);
