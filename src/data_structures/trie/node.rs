// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the lookup trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node owns its
//! children outright, so the tree is acyclic and has no back references.
//! Tearing a node down is iterative, so a single very long word does not
//! recurse once per character when the trie is dropped or cleared.

use std::collections::BTreeMap;

/// A node in the lookup trie.
///
/// Each node represents one character along a word path. Children are kept in
/// an ordered map so that every traversal visits them in ascending character
/// order.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of characters to child nodes
    pub(crate) children: BTreeMap<char, TrieNode>,

    /// Whether the path to this node spells a complete word
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the path from the root to this node spells a stored word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the child reached over the edge labelled `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Iterates over `(edge, child)` pairs in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            // `node` is dropped with no children left, so this never nests
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a single chain of `depth` nodes below a fresh root.
    fn chain(depth: usize) -> TrieNode {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..depth {
            node = node.children.entry('x').or_default();
        }
        node.is_terminal = true;
        root
    }

    #[test]
    fn test_drop_deep_chain() {
        drop(chain(200_000));
    }

    #[test]
    fn test_drop_wide_node() {
        let mut root = TrieNode::new();
        for c in 'a'..='z' {
            root.children.insert(c, chain(1_000));
        }
        assert_eq!(root.child_count(), 26);
        drop(root);
    }
}
