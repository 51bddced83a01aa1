// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bounded-cost approximate search over the lookup trie.
//!
//! The search aligns a query against trie paths using four moves, each of
//! which consumes exactly one query character:
//!
//! | Move | Trie | Cost |
//! |------|------|------|
//! | exact match | follow the child equal to the query character | +0 |
//! | substitution | follow any child different from the query character | +1 |
//! | substitution (second pass) | follow any child, the matching one included | +1 |
//! | skip | stay on the current node | +1 |
//!
//! A path completes when the query is exhausted; if it ends on a terminal node
//! whose word has not been seen yet, that word is recorded with the path's
//! cost. Paths whose cost would exceed the ceiling are cut. Results are then
//! stably sorted by cost.
//!
//! The cost is not an edit distance. In particular a result never has more
//! characters than the query, and the retained cost of a word is that of the
//! first path discovering it.

use fnv::FnvHashSet;
use serde::Serialize;
use tracing::{debug, trace};

use super::{Trie, TrieError, TrieNode, TrieResult};

/// Cost ceiling used when the caller does not provide one.
pub const DEFAULT_MAX_COST: u32 = 3;

/// A word found by the approximate search together with its path cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchResult {
    /// The stored word.
    pub word: String,

    /// Number of non-exact moves on the path that discovered the word.
    pub cost: u32,
}

/// Results of a single search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Deduplicated results, ascending cost, ties in discovery order.
    pub results: Vec<SearchResult>,

    /// Number of traversal frames popped off the work stack.
    pub frames_visited: usize,
}

impl SearchOutcome {
    /// Drops the costs, keeping only the ordered words.
    pub fn into_words(self) -> Vec<String> {
        self.results.into_iter().map(|result| result.word).collect()
    }

    /// Number of distinct words found.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no word was reachable within the ceiling.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// One pending traversal state.
///
/// Frames do not own their word. The word lives in a path buffer shared by
/// the whole traversal, `depth` is the buffer length before `edge` is applied.
#[derive(Debug)]
struct Frame<'a> {
    node: &'a TrieNode,
    index: usize,
    depth: usize,
    edge: Option<char>,
    cost: u32,
}

impl<'a> Frame<'a> {
    /// Frame for moving onto `child` over edge `c` from a path of `depth` chars.
    fn descend(&self, depth: usize, c: char, child: &'a TrieNode, cost: u32) -> Self {
        Self {
            node: child,
            index: self.index + 1,
            depth,
            edge: Some(c),
            cost,
        }
    }

    /// Frame for consuming a query character without moving in the trie.
    fn skip(&self, depth: usize, cost: u32) -> Self {
        Self {
            node: self.node,
            index: self.index + 1,
            depth,
            edge: None,
            cost,
        }
    }
}

/// Accumulates first-seen results for one search invocation.
#[derive(Debug, Default)]
struct ResultCollector {
    seen: FnvHashSet<String>,
    results: Vec<SearchResult>,
}

impl ResultCollector {
    fn record(&mut self, path: &[char], cost: u32) {
        let word: String = path.iter().collect();
        if self.seen.contains(&word) {
            return;
        }
        trace!(word = %word, cost, "Recorded approximate match");
        self.seen.insert(word.clone());
        self.results.push(SearchResult { word, cost });
    }

    fn into_sorted(mut self) -> Vec<SearchResult> {
        // `sort_by_key` is stable, equal costs keep discovery order
        self.results.sort_by_key(|result| result.cost);
        self.results
    }
}

/// Backtracking search for words close to a query.
///
/// The traversal runs on an explicit work stack instead of native recursion,
/// so deep queries cannot exhaust the call stack. Successor frames are pushed
/// in reverse so that they are popped in the recursive order: exact match,
/// non-matching substitutions, the second substitution pass, then skip. Within
/// each pass children are visited in ascending character order.
///
/// ```
/// use fuzzy_lookup_lib::data_structures::trie::{ApproximateSearch, Trie};
///
/// let trie: Trie = ["bat", "cat"].into_iter().collect();
/// let outcome = ApproximateSearch::new(&trie).with_max_cost(1)?.run("rat");
/// assert_eq!(outcome.into_words(), vec!["bat", "cat"]);
/// # Ok::<(), fuzzy_lookup_lib::data_structures::trie::TrieError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ApproximateSearch<'a> {
    trie: &'a Trie,
    max_cost: u32,
    skip_redundant_pass: bool,
}

impl<'a> ApproximateSearch<'a> {
    /// Creates a search over `trie` with the default ceiling.
    pub fn new(trie: &'a Trie) -> Self {
        Self {
            trie,
            max_cost: DEFAULT_MAX_COST,
            skip_redundant_pass: false,
        }
    }

    /// Sets the cost ceiling.
    ///
    /// # Errors
    ///
    /// * [`TrieError::NegativeMaxCost`] if `max_cost` is negative.
    /// * [`TrieError::MaxCostTooLarge`] if it does not fit in a `u32`.
    pub fn with_max_cost(mut self, max_cost: i64) -> TrieResult<Self> {
        if max_cost < 0 {
            return Err(TrieError::NegativeMaxCost(max_cost));
        }
        self.max_cost = u32::try_from(max_cost).map_err(|_| TrieError::MaxCostTooLarge {
            max_cost,
            limit: u32::MAX,
        })?;
        Ok(self)
    }

    /// When enabled, the second substitution pass leaves out the child equal
    /// to the query character. That child is already reached at no cost by
    /// the exact move, so the results are unchanged and fewer frames are
    /// visited.
    pub fn skip_redundant_pass(mut self, skip: bool) -> Self {
        self.skip_redundant_pass = skip;
        self
    }

    /// The configured cost ceiling.
    pub fn max_cost(&self) -> u32 {
        self.max_cost
    }

    /// Runs the search for `query`.
    pub fn run(&self, query: &str) -> SearchOutcome {
        let query: Vec<char> = query.chars().collect();
        let mut collector = ResultCollector::default();
        let mut frames_visited = 0usize;

        // Frames are only pushed within budget, so no popped frame needs pruning.
        let mut stack = vec![Frame {
            node: self.trie.root(),
            index: 0,
            depth: 0,
            edge: None,
            cost: 0,
        }];
        let mut path: Vec<char> = Vec::with_capacity(query.len());

        while let Some(frame) = stack.pop() {
            frames_visited += 1;

            // Everything popped since this frame was pushed lies below its
            // parent, so the first `depth` characters are still the parent's.
            path.truncate(frame.depth);
            path.extend(frame.edge);

            match query.get(frame.index) {
                Some(&expected) => self.expand(&frame, path.len(), expected, &mut stack),
                None => {
                    if frame.node.is_terminal() {
                        collector.record(&path, frame.cost);
                    }
                }
            }
        }

        let results = collector.into_sorted();
        debug!(
            query_len = query.len(),
            max_cost = self.max_cost,
            frames_visited,
            results = results.len(),
            "Approximate search finished"
        );

        SearchOutcome {
            results,
            frames_visited,
        }
    }

    /// Pushes the successors of `frame`, last-explored first. `depth` is the
    /// length of the path spelled by `frame`.
    fn expand(&self, frame: &Frame<'a>, depth: usize, expected: char, stack: &mut Vec<Frame<'a>>) {
        let node: &'a TrieNode = frame.node;

        if let Some(cost) = frame.cost.checked_add(1).filter(|c| *c <= self.max_cost) {
            stack.push(frame.skip(depth, cost));

            for (c, child) in node.children().rev() {
                if self.skip_redundant_pass && c == expected {
                    continue;
                }
                stack.push(frame.descend(depth, c, child, cost));
            }

            for (c, child) in node.children().rev().filter(|(c, _)| *c != expected) {
                stack.push(frame.descend(depth, c, child, cost));
            }
        }

        if let Some(child) = node.child(expected) {
            stack.push(frame.descend(depth, expected, child, frame.cost));
        }
    }
}
