//! Searchable fitness entities.

use std::fmt;
use std::hash::Hash;

use crate::words::{WordSet, words_from_names};

/// Identifier of an [`Activity`].
pub type ActivityId = String;

/// Identifier of a [`Trainable`].
pub type TrainableId = String;

/// An item a [`Catalog`](super::Catalog) can own and search.
pub trait Cataloged: Eq + Hash {
    /// Identifier type, unique within a catalog.
    type Id: Clone + Eq + Hash + fmt::Display;

    /// Returns the identifier of this item.
    fn id(&self) -> &Self::Id;

    /// Returns the display name, used for alphabetical ordering.
    fn name(&self) -> &str;

    /// Returns the words this item is findable by.
    fn words(&self) -> WordSet;
}

// =============================================================================
// Activity
// =============================================================================

/// Something the user does, e.g. "Bulgarian split squat".
///
/// Activities are findable by their name and by every alternative name.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::catalog::{Activity, Cataloged};
///
/// let activity = Activity::new("act_1", "Bulgarian Split Squat")
///     .with_other_names(["BSS"]);
///
/// assert!(activity.words().contains("bss"));
/// assert!(activity.words().contains("split"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    /// Unique identifier.
    pub id: ActivityId,
    /// Main name.
    pub name: String,
    /// Alternative names the activity is also known by.
    #[cfg_attr(feature = "serde", serde(default))]
    pub other_names: Vec<String>,
}

impl Activity {
    /// Creates an activity without alternative names.
    #[must_use]
    pub fn new(id: impl Into<ActivityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            other_names: Vec::new(),
        }
    }

    /// Replaces the alternative names.
    #[must_use]
    pub fn with_other_names<I, S>(self, other_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            other_names: other_names.into_iter().map(Into::into).collect(),
            ..self
        }
    }
}

/// Words of the activity's name and alternative names.
pub fn activity_words(activity: &Activity) -> WordSet {
    words_from_names(std::iter::once(&activity.name).chain(&activity.other_names))
}

impl Cataloged for Activity {
    type Id = ActivityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn words(&self) -> WordSet {
        activity_words(self)
    }
}

// =============================================================================
// Trainable
// =============================================================================

/// Something the user wants to improve, e.g. "Grip strength".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trainable {
    /// Unique identifier.
    pub id: TrainableId,
    /// Name.
    pub name: String,
}

impl Trainable {
    /// Creates a trainable.
    #[must_use]
    pub fn new(id: impl Into<TrainableId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Words of the trainable's name.
pub fn trainable_words(trainable: &Trainable) -> WordSet {
    words_from_names([&trainable.name])
}

impl Cataloged for Trainable {
    type Id = TrainableId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn words(&self) -> WordSet {
        trainable_words(self)
    }
}
