//! Crate-level test modules.
//!
//! Component tests live next to their components; this module holds the
//! tests that span modules (configuration loading, error reporting) and the
//! shared fixtures they use.

pub mod test_utils;

pub use test_utils::TestFixture;
