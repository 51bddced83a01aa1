//! Data structures for the fuzzy lookup crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Deterministic iteration order wherever results depend on it
//! - Read-only structures are safe to share across threads once built

pub mod trie;

// Re-export common data structures
pub use trie::{ApproximateSearch, SearchResult, Trie, TrieError, TrieResult};
