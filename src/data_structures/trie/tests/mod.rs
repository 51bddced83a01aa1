// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the lookup trie and its approximate search.

mod property_tests;

use super::Trie;
use crate::dictionary::DEFAULT_WORDS;

/// Builds a trie over the built-in dictionary used by the scenario tests.
pub(super) fn sample_trie() -> Trie {
    DEFAULT_WORDS.into_iter().collect()
}
