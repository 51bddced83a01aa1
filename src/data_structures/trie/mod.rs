// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lookup Trie Implementation
//!
//! This module provides a character-keyed prefix tree holding a dictionary of
//! words, together with a bounded-cost approximate search over it.
//!
//! The trie is built once (insertion is the only mutating operation apart from
//! [`Trie::clear`]) and then queried read-only. Once built it is `Send + Sync`
//! and can be shared across threads behind an `Arc`.
//!
//! # Example
//!
//! ```
//! use fuzzy_lookup_lib::data_structures::trie::Trie;
//!
//! let trie: Trie = ["apple", "ape", "apt"].into_iter().collect();
//! let words = trie.find_closest("apt", 1).unwrap();
//! assert_eq!(words, vec!["apt".to_string(), "ape".to_string()]);
//! ```

mod error;
mod node;
mod search;

#[cfg(test)]
mod tests;

pub use error::TrieError;
pub use node::TrieNode;
pub use search::{ApproximateSearch, SearchOutcome, SearchResult, DEFAULT_MAX_COST};

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// A prefix tree storing a finite set of words.
#[derive(Debug, Default)]
pub struct Trie {
    /// The root node of the trie, never removed
    root: TrieNode,

    /// Number of distinct stored words
    len: usize,
}

impl Trie {
    /// Creates a new empty `Trie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root node for traversal.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the word's path are created and the final node is
    /// marked terminal. Inserting the empty string marks the root terminal.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` otherwise.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.len += 1;
            tracing::trace!(word, "Inserted word into trie");
        }
        is_new
    }

    /// Checks whether `word` is stored in the trie.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.node_at(word.as_ref())
            .map_or(false, TrieNode::is_terminal)
    }

    /// Returns the number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word (not even the empty word) is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Returns every stored word in ascending character order.
    pub fn words(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.len);
        collect_words(&self.root, String::new(), &mut result);
        result
    }

    /// Finds all stored words starting with `prefix`, in ascending order.
    ///
    /// An empty prefix yields every stored word.
    pub fn find_by_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut result = Vec::new();
        if let Some(node) = self.node_at(prefix) {
            collect_words(node, prefix.to_string(), &mut result);
        }
        result
    }

    /// Returns the words reachable from `query` within `max_cost` edit
    /// operations, cheapest first.
    ///
    /// See [`ApproximateSearch`] for the move set and the cost model.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::NegativeMaxCost`] if `max_cost` is negative.
    pub fn find_closest(&self, query: &str, max_cost: i64) -> TrieResult<Vec<String>> {
        Ok(self
            .search(query, max_cost)?
            .into_iter()
            .map(|result| result.word)
            .collect())
    }

    /// Same as [`Trie::find_closest`] with the default ceiling of
    /// [`DEFAULT_MAX_COST`].
    pub fn find_closest_default(&self, query: &str) -> Vec<String> {
        ApproximateSearch::new(self)
            .run(query)
            .into_words()
    }

    /// Same traversal as [`Trie::find_closest`], keeping the cost of each
    /// result.
    pub fn search(&self, query: &str, max_cost: i64) -> TrieResult<Vec<SearchResult>> {
        let search = ApproximateSearch::new(self).with_max_cost(max_cost)?;
        Ok(search.run(query).results)
    }

    /// Walks the exact path spelled by `key`.
    fn node_at(&self, key: &str) -> Option<&TrieNode> {
        key.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

/// Depth-first collection of terminal paths below `node`.
///
/// Runs on an explicit stack over a shared path buffer. Each entry records the
/// buffer length before its edge, so popping an entry first rewinds the path.
/// Children are pushed in reverse to come out in ascending order.
fn collect_words(node: &TrieNode, mut current: String, result: &mut Vec<String>) {
    let mut stack: Vec<(usize, Option<char>, &TrieNode)> = vec![(current.len(), None, node)];

    while let Some((len, edge, node)) = stack.pop() {
        current.truncate(len);
        current.extend(edge);
        if node.is_terminal {
            result.push(current.clone());
        }

        let len = current.len();
        stack.extend(node.children.iter().rev().map(|(c, child)| (len, Some(*c), child)));
    }
}

impl<W> Extend<W> for Trie
where
    W: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<W> FromIterator<W> for Trie
where
    W: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
