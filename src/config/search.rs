//! Search configuration module.
//!
//! Settings applied to every approximate lookup issued by the binary.

use super::{ConfigResult, Validate};
use crate::data_structures::trie::{ApproximateSearch, Trie, DEFAULT_MAX_COST};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Approximate search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of non-exact moves allowed along a search path.
    ///
    /// Signed so that a negative value coming from a file or the environment
    /// is reported instead of failing deserialization opaquely.
    pub max_cost: i64,

    /// Leave the matching child out of the second substitution pass
    pub skip_redundant_pass: bool,

    /// Maximum number of words to display per query (None for all)
    pub max_results: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_cost: i64::from(DEFAULT_MAX_COST),
            skip_redundant_pass: false,
            max_results: None,
        }
    }
}

impl SearchConfig {
    /// Builds an [`ApproximateSearch`] over `trie` from these settings.
    pub fn searcher<'a>(&self, trie: &'a Trie) -> ConfigResult<ApproximateSearch<'a>> {
        let search = ApproximateSearch::new(trie)
            .with_max_cost(self.max_cost)
            .map_err(|e| ConfigError::ValueOutOfRange {
                key: "search.max_cost".to_string(),
                message: e.to_string(),
            })?;
        Ok(search.skip_redundant_pass(self.skip_redundant_pass))
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_cost < 0 || self.max_cost > i64::from(u32::MAX) {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_cost".to_string(),
                message: format!("must be between 0 and {}, got {}", u32::MAX, self.max_cost),
            });
        }

        if self.max_results == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
