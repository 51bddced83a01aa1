// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the lookup trie and its approximate search.

use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

use crate::data_structures::trie::{ApproximateSearch, SearchResult, Trie, TrieNode};

// Small alphabets keep the exponential traversal cheap while still producing
// plenty of shared prefixes and near misses.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,4}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..12)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcd]{0,5}").unwrap()
}

/// Straightforward recursive formulation of the search, used as an oracle
/// for the explicit-stack traversal.
fn reference_search(trie: &Trie, query: &str, max_cost: u32) -> Vec<SearchResult> {
    #[allow(clippy::too_many_arguments)]
    fn visit(
        node: &TrieNode,
        query: &[char],
        index: usize,
        word: String,
        cost: u32,
        max_cost: u32,
        seen: &mut HashSet<String>,
        results: &mut Vec<SearchResult>,
    ) {
        if cost > max_cost {
            return;
        }
        let Some(&expected) = query.get(index) else {
            if node.is_terminal() && seen.insert(word.clone()) {
                results.push(SearchResult { word, cost });
            }
            return;
        };

        if let Some(child) = node.child(expected) {
            visit(child, query, index + 1, format!("{word}{expected}"), cost, max_cost, seen, results);
        }
        for (c, child) in node.children() {
            if c != expected {
                visit(child, query, index + 1, format!("{word}{c}"), cost + 1, max_cost, seen, results);
            }
        }
        for (c, child) in node.children() {
            visit(child, query, index + 1, format!("{word}{c}"), cost + 1, max_cost, seen, results);
        }
        visit(node, query, index + 1, word, cost + 1, max_cost, seen, results);
    }

    let query: Vec<char> = query.chars().collect();
    let mut seen = HashSet::new();
    let mut results = Vec::new();
    visit(trie.root(), &query, 0, String::new(), 0, max_cost, &mut seen, &mut results);
    results.sort_by_key(|result| result.cost);
    results
}

proptest! {
    // Property: every stored word is found by itself, alone, at cost 0
    #[test]
    fn prop_exact_membership(words in dictionary_strategy()) {
        let trie: Trie = words.iter().collect();
        for word in &words {
            let results = trie.search(word, 0).unwrap();
            prop_assert_eq!(results, vec![SearchResult { word: word.clone(), cost: 0 }]);
        }
    }

    // Property: raising the ceiling never removes a previously found word
    #[test]
    fn prop_ceiling_monotonicity(
        words in dictionary_strategy(),
        query in query_strategy(),
        low in 0i64..3,
        extra in 0i64..2,
    ) {
        let trie: Trie = words.iter().collect();
        let narrow: BTreeSet<String> = trie.find_closest(&query, low).unwrap().into_iter().collect();
        let wide: BTreeSet<String> = trie.find_closest(&query, low + extra).unwrap().into_iter().collect();
        prop_assert!(narrow.is_subset(&wide));
    }

    // Property: output is deduplicated, ordered by cost, within budget and
    // made only of stored words no longer than the query
    #[test]
    fn prop_results_well_formed(
        words in dictionary_strategy(),
        query in query_strategy(),
        max_cost in 0i64..=3,
    ) {
        let trie: Trie = words.iter().collect();
        let results = trie.search(&query, max_cost).unwrap();

        let distinct: HashSet<&str> = results.iter().map(|r| r.word.as_str()).collect();
        prop_assert_eq!(distinct.len(), results.len());

        for pair in results.windows(2) {
            prop_assert!(pair[0].cost <= pair[1].cost);
        }

        let query_len = query.chars().count();
        for result in &results {
            prop_assert!(i64::from(result.cost) <= max_cost);
            prop_assert!(trie.contains(&result.word));
            prop_assert!(result.word.chars().count() <= query_len);
        }
    }

    // Property: the explicit-stack traversal matches the recursive formulation
    #[test]
    fn prop_matches_recursive_reference(
        words in dictionary_strategy(),
        query in query_strategy(),
        max_cost in 0u32..=3,
    ) {
        let trie: Trie = words.iter().collect();
        let outcome = ApproximateSearch::new(&trie)
            .with_max_cost(i64::from(max_cost))
            .unwrap()
            .run(&query);
        prop_assert_eq!(outcome.results, reference_search(&trie, &query, max_cost));
    }

    // Property: dropping the redundant substitution pass changes nothing but
    // the amount of work
    #[test]
    fn prop_skip_redundant_pass_is_equivalent(
        words in dictionary_strategy(),
        query in query_strategy(),
        max_cost in 0i64..=3,
    ) {
        let trie: Trie = words.iter().collect();
        let faithful = ApproximateSearch::new(&trie).with_max_cost(max_cost).unwrap().run(&query);
        let pruned = ApproximateSearch::new(&trie)
            .with_max_cost(max_cost)
            .unwrap()
            .skip_redundant_pass(true)
            .run(&query);

        prop_assert!(pruned.frames_visited <= faithful.frames_visited);
        prop_assert_eq!(pruned.results, faithful.results);
    }

    // Property: inserting a word several times is the same as inserting it once
    #[test]
    fn prop_idempotent_insertion(
        words in dictionary_strategy(),
        query in query_strategy(),
        repeats in 2usize..4,
    ) {
        let once: Trie = words.iter().collect();
        let mut many = Trie::new();
        for _ in 0..repeats {
            many.extend(&words);
        }

        prop_assert_eq!(once.words(), many.words());
        prop_assert_eq!(once.len(), many.len());
        prop_assert_eq!(
            once.find_closest(&query, 3).unwrap(),
            many.find_closest(&query, 3).unwrap()
        );
    }

    // Property: the recognized word set is exactly the inserted set
    #[test]
    fn prop_words_match_inserted_set(words in dictionary_strategy()) {
        let trie: Trie = words.iter().collect();
        let expected: Vec<String> = words.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(trie.words(), expected);
        prop_assert_eq!(trie.len(), trie.words().len());
    }

    // Property: an empty trie never yields results
    #[test]
    fn prop_empty_trie_finds_nothing(query in query_strategy(), max_cost in 0i64..=4) {
        let trie = Trie::new();
        prop_assert!(trie.find_closest(&query, max_cost).unwrap().is_empty());
    }
}
