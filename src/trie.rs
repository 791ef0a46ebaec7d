//! Character trie over lowercase words.
//!
//! This module provides [`Trie`], a prefix tree that stores a set of words and
//! answers "which stored words start with this prefix?".
//!
//! # Overview
//!
//! Every node owns its children outright, keyed by the next character. A node
//! is marked as a word end when the path from the root to it spells a stored
//! word; such a node may still have children (`"boom"` and `"boomer"`).
//!
//! Updates come in two flavours, kept as separate entry points:
//!
//! - **In place**: [`Trie::insert`] and [`Trie::remove`] take `&mut self`.
//! - **Non-mutating**: [`Trie::insert_all`] and [`Trie::remove_all`] take
//!   `&self`, deep-clone the trie, apply the change to the clone and return
//!   it. The original is left untouched, which lets a caller keep a snapshot
//!   around (undo, speculative edits).
//!
//! Removal prunes every node that no longer leads to a stored word, so a trie
//! always has the same shape as a trie freshly built from its current words.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity                          |
//! |----------------|-------------------------------------|
//! | `insert`       | O(k)                                |
//! | `remove`       | O(k)                                |
//! | `contains`     | O(k)                                |
//! | `find_words`   | O(k + size of the matching subtree) |
//! | `insert_all`   | O(n + m·k)                          |
//! | `remove_all`   | O(n + m·k)                          |
//! | `len`          | O(1)                                |
//!
//! where `k` is the word length, `n` the number of nodes and `m` the number
//! of words applied.
//!
//! # Examples
//!
//! ```rust
//! use trie_autocomplete::trie::Trie;
//!
//! let mut trie = Trie::build(["code", "coder", "cocoa", "banana"]);
//!
//! let mut matches: Vec<_> = trie.find_words("cod").into_iter().collect();
//! matches.sort();
//! assert_eq!(matches, vec!["code", "coder"]);
//!
//! // In-place removal
//! trie.remove("code");
//! assert_eq!(trie.find_words("cod").len(), 1);
//!
//! // Non-mutating insertion: the original is preserved
//! let extended = trie.insert_all(["cod"]);
//! assert!(extended.contains("cod"));
//! assert!(!trie.contains("cod"));
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::collections::IndexMap;
use crate::words::{Word, WordSet};

/// Words longer than this spill the removal path onto the heap.
const INLINE_WORD_LENGTH: usize = 32;

// =============================================================================
// TrieNode Definition
// =============================================================================

/// A single node of a [`Trie`].
///
/// Nodes are only created and modified through [`Trie`]; this type exposes
/// read-only access for callers that want to walk the tree themselves.
#[derive(Default)]
pub struct TrieNode {
    children: IndexMap<char, TrieNode>,
    is_word_end: bool,
}

impl TrieNode {
    /// Creates an empty node with no children that is not a word end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trie_autocomplete::trie::TrieNode;
    ///
    /// let node = TrieNode::new();
    /// assert!(!node.is_word_end());
    /// assert_eq!(node.children().count(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the path from the root to this node spells a stored word.
    #[inline]
    #[must_use]
    pub const fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    /// Returns the child reached through `character`, if any.
    #[inline]
    #[must_use]
    pub fn child(&self, character: char) -> Option<&Self> {
        self.children.get(&character)
    }

    /// Iterates over the outgoing edges of this node, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &Self)> {
        self.children
            .iter()
            .map(|(character, child)| (*character, child))
    }

    /// Follows `path` character by character.
    fn descend(&self, path: &str) -> Option<&Self> {
        path.chars()
            .try_fold(self, |node, character| node.child(character))
    }

    /// Follows `path` character by character, with write access.
    fn descend_mut(&mut self, path: &[char]) -> Option<&mut Self> {
        let mut node = self;
        for character in path {
            node = node.children.get_mut(character)?;
        }
        Some(node)
    }

    /// Adds every word ending at or below this node to `words`.
    ///
    /// `buffer` holds the characters from the root to this node and is
    /// restored before returning. Walks with one pending edge iterator per
    /// level instead of recursing.
    fn collect_words(&self, buffer: &mut String, words: &mut WordSet) {
        if self.is_word_end {
            words.insert(buffer.clone());
        }

        let mut pending = vec![self.children.iter()];
        while let Some(edges) = pending.last_mut() {
            if let Some((character, child)) = edges.next() {
                buffer.push(*character);
                if child.is_word_end {
                    words.insert(buffer.clone());
                }
                pending.push(child.children.iter());
            } else {
                pending.pop();
                if !pending.is_empty() {
                    buffer.pop();
                }
            }
        }
    }

    /// Unmarks the word spelled by `characters` below this node and drops
    /// every node on its path that no other stored word needs.
    ///
    /// The cut point is the deepest node on the path that is a word end or
    /// branches; everything below it on the path is detached in one step.
    /// Returns `true` if the word was stored.
    fn remove_path(&mut self, characters: &[char]) -> bool {
        let mut cut = 0;
        let mut node: &Self = self;
        for (depth, character) in characters.iter().enumerate() {
            if node.is_word_end || node.children.len() > 1 {
                cut = depth;
            }
            let Some(child) = node.children.get(character) else {
                return false;
            };
            node = child;
        }
        if !node.is_word_end {
            return false;
        }

        if characters.is_empty() || !node.children.is_empty() {
            let Some(end) = self.descend_mut(characters) else {
                return false;
            };
            end.is_word_end = false;
            return true;
        }

        let Some(owner) = self.descend_mut(&characters[..cut]) else {
            return false;
        };
        owner.children.remove(&characters[cut]);
        true
    }
}

/// A node being copied, with the source edges still to visit.
struct CopyFrame<'a> {
    character: char,
    edges: std::collections::hash_map::Iter<'a, char, TrieNode>,
    copy: TrieNode,
}

impl<'a> CopyFrame<'a> {
    fn new(character: char, source: &'a TrieNode) -> Self {
        Self {
            character,
            edges: source.children.iter(),
            copy: TrieNode {
                children: IndexMap::default(),
                is_word_end: source.is_word_end,
            },
        }
    }
}

// Clone, equality and drop use explicit stacks; recursion depth would equal
// word length.

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut frames = vec![CopyFrame::new('\0', self)];
        while let Some(frame) = frames.last_mut() {
            if let Some((character, child)) = frame.edges.next() {
                frames.push(CopyFrame::new(*character, child));
                continue;
            }
            let Some(done) = frames.pop() else {
                break;
            };
            match frames.last_mut() {
                Some(parent) => {
                    parent.copy.children.insert(done.character, done.copy);
                }
                None => return done.copy,
            }
        }
        Self::default()
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((left, right)) = pairs.pop() {
            if left.is_word_end != right.is_word_end
                || left.children.len() != right.children.len()
            {
                return false;
            }
            for (character, left_child) in &left.children {
                let Some(right_child) = right.children.get(character) else {
                    return false;
                };
                pairs.push((left_child, right_child));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut detached: Vec<Self> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = detached.pop() {
            detached.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<(char, &Self)> = self.children().collect();
        edges.sort_unstable_by_key(|(character, _)| *character);
        formatter
            .debug_struct("TrieNode")
            .field("is_word_end", &self.is_word_end)
            .field("children", &edges)
            .finish()
    }
}

// =============================================================================
// Trie Definition
// =============================================================================

/// A set of words stored as a prefix tree.
///
/// Two tries are equal when they store the same words, regardless of the
/// order the words were inserted or removed in.
///
/// # Examples
///
/// ```rust
/// use trie_autocomplete::trie::Trie;
///
/// let forward = Trie::build(["bu", "bun", "bum"]);
/// let backward = Trie::build(["bum", "bun", "bu", "bun"]);
/// assert_eq!(forward, backward);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    length: usize,
}

impl Trie {
    /// Creates an empty trie.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie holding every word of `words`.
    ///
    /// The result does not depend on the order of `words`, and repeated
    /// words are stored once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trie_autocomplete::trie::Trie;
    ///
    /// let trie = Trie::build(["bu", "bun", "bum", "be"]);
    /// assert_eq!(trie.len(), 4);
    /// assert!(trie.find_words("blah").is_empty());
    /// ```
    #[must_use]
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }

    /// Returns the number of stored words.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if no word is stored.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the root node.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns `true` if `word` is stored as a complete word.
    ///
    /// A prefix of a stored word is not itself contained unless it was
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trie_autocomplete::trie::Trie;
    ///
    /// let trie = Trie::build(["boomer"]);
    /// assert!(trie.contains("boomer"));
    /// assert!(!trie.contains("boom"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.root
            .descend(word)
            .is_some_and(TrieNode::is_word_end)
    }

    /// Stores `word`, creating the missing nodes along its path.
    ///
    /// The empty word is legal and marks the root itself.
    ///
    /// Returns `true` if the word was not stored before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trie_autocomplete::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("boomerang"));
    /// assert!(!trie.insert("boomerang"));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for character in word.chars() {
            node = node.children.entry(character).or_default();
        }

        if node.is_word_end {
            return false;
        }
        node.is_word_end = true;
        self.length += 1;
        true
    }

    /// Removes `word` and prunes the nodes no other stored word needs.
    ///
    /// Removing a word that is not stored is a no-op. When `word` is a
    /// prefix of another stored word only its word-end mark is cleared.
    ///
    /// Returns `true` if the word was stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trie_autocomplete::trie::Trie;
    ///
    /// let mut trie = Trie::build(["boom", "boomer", "be"]);
    ///
    /// assert!(trie.remove("boom"));
    /// assert!(!trie.remove("zoom"));
    /// assert_eq!(trie.find_words("bo").len(), 1);
    /// assert!(trie.contains("boomer"));
    /// ```
    pub fn remove(&mut self, word: &str) -> bool {
        let characters: SmallVec<[char; INLINE_WORD_LENGTH]> = word.chars().collect();
        let removed = self.root.remove_path(&characters);
        if removed {
            self.length -= 1;
        }
        removed
    }

    /// Returns a copy of this trie with `words` added.
    ///
    /// `self` is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trie_autocomplete::trie::Trie;
    ///
    /// let original = Trie::build(["bu", "bun"]);
    /// let updated = original.insert_all(["boomerang"]);
    ///
    /// assert!(updated.contains("boomerang"));
    /// assert!(original.find_words("boom").is_empty());
    /// ```
    #[must_use]
    pub fn insert_all<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut clone = self.clone();
        clone.extend(words);
        clone
    }

    /// Returns a copy of this trie with `words` removed.
    ///
    /// `self` is not modified. Words that are not stored are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trie_autocomplete::trie::Trie;
    ///
    /// let original = Trie::build(["foo", "bar"]);
    /// let updated = original.remove_all(["foo", "zoom"]);
    ///
    /// assert!(!updated.contains("foo"));
    /// assert!(updated.contains("bar"));
    /// assert!(original.contains("foo"));
    /// ```
    #[must_use]
    pub fn remove_all<I, S>(&self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut clone = self.clone();
        for word in words {
            clone.remove(word.as_ref());
        }
        clone
    }

    /// Returns every stored word starting with `prefix`.
    ///
    /// The prefix itself is included when it is a stored word. A prefix that
    /// leaves the trie yields an empty set; the empty prefix yields every
    /// stored word.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trie_autocomplete::trie::Trie;
    ///
    /// let trie = Trie::build(["bu", "bun", "bum", "be"]);
    ///
    /// let mut matches: Vec<_> = trie.find_words("bu").into_iter().collect();
    /// matches.sort();
    /// assert_eq!(matches, vec!["bu", "bum", "bun"]);
    /// ```
    #[must_use]
    pub fn find_words(&self, prefix: &str) -> WordSet {
        let mut words = WordSet::new();
        if let Some(node) = self.root.descend(prefix) {
            let mut buffer = prefix.to_string();
            node.collect_words(&mut buffer, &mut words);
        }
        words
    }

    /// Returns every stored word.
    #[must_use]
    pub fn words(&self) -> WordSet {
        self.find_words("")
    }

    /// Returns every stored word in lexicographic order.
    fn sorted_words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words().into_iter().collect();
        words.sort_unstable();
        words
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::build(words)
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.sorted_words()).finish()
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for word in self.sorted_words() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{word}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(Trie: Send, Sync, Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for word in self.sorted_words() {
            seq.serialize_element(&word)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct TrieVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for TrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of words")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut trie = Trie::new();
        while let Some(word) = seq.next_element::<String>()? {
            trie.insert(&word);
        }
        Ok(trie)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(TrieVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
