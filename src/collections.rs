//! Feature-selected collection and pointer aliases.
//!
//! The trie and the word index are hash-map heavy; the `fxhash` feature swaps
//! the standard `SipHash` hasher for `rustc-hash`'s `FxHash` in every internal
//! map. Public return types always use the standard hasher so callers see the
//! same API regardless of features.

// =============================================================================
// Hasher Selection
// =============================================================================

/// Hasher used by internal maps and sets.
#[cfg(feature = "fxhash")]
pub(crate) type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
pub(crate) type IndexHasher = std::hash::RandomState;

/// Hash map used internally by the trie and the word index.
pub(crate) type IndexMap<K, V> = std::collections::HashMap<K, V, IndexHasher>;

/// Hash set used internally by the word index.
pub(crate) type IndexSet<T> = std::collections::HashSet<T, IndexHasher>;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, so catalogs
/// of thread-safe items can move between threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`, so
/// catalogs stay on the thread that created them.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Tests
// =============================================================================
