//! Fuzzy Lookup Library
//!
//! This library contains a trie-backed dictionary with a bounded-cost
//! approximate word search, plus the configuration, dictionary loading and
//! interactive harness used by the `fuzzy_lookup` binary.
//!
//! # Architecture
//!
//! - [`data_structures::trie`] holds the core: the [`Trie`] and its
//!   [`ApproximateSearch`]
//! - [`config`] loads layered settings from defaults, files and environment
//! - [`dictionary`] turns word lists into tries
//! - [`repl`] answers queries line by line
//! - [`error`] carries the crate-wide error type and error reporting

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod repl;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

pub use data_structures::trie::{ApproximateSearch, SearchResult, Trie};

/// Version information for the fuzzy lookup crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
