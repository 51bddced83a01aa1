// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the lookup trie.
//!
//! Insertion never fails; the only errors are rejected search parameters
//! detected at the public entry points.

/// Errors that can occur in trie search operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// A negative cost ceiling was requested.
    #[error("Maximum cost must be non-negative, got {0}")]
    NegativeMaxCost(i64),

    /// The cost ceiling does not fit the traversal's cost counter.
    #[error("Maximum cost {max_cost} exceeds the supported limit of {limit}")]
    MaxCostTooLarge {
        /// The requested ceiling.
        max_cost: i64,
        /// The largest supported ceiling.
        limit: u32,
    },
}
