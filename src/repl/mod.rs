//! Interactive lookup loop.
//!
//! Reads one query per line and prints the closest stored words. The loop is
//! generic over its input and output so it can be driven by a terminal or by
//! in-memory buffers.

use std::io::{BufRead, Write};

use crate::data_structures::trie::{ApproximateSearch, SearchResult};
use crate::error::LookupResult;

/// Commands that end the session.
const QUIT_COMMANDS: [&str; 2] = [":q", ":quit"];

/// Printed when a query has no match within the cost ceiling.
pub const NO_MATCHES: &str = "No close words found.";

/// Renders results with their costs as a pretty-printed JSON array.
pub fn results_to_json(results: &[SearchResult]) -> LookupResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// A read-query-print loop over a configured search.
#[derive(Debug)]
pub struct Repl<'a> {
    search: ApproximateSearch<'a>,
    max_results: Option<usize>,
    prompt: &'static str,
}

impl<'a> Repl<'a> {
    /// Creates a loop issuing every query through `search`.
    pub fn new(search: ApproximateSearch<'a>) -> Self {
        Self {
            search,
            max_results: None,
            prompt: "> ",
        }
    }

    /// Caps the number of words printed per query.
    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Formats the answer for a single query.
    pub fn answer(&self, query: &str) -> String {
        let mut words = self.search.run(query).into_words();
        if let Some(limit) = self.max_results {
            words.truncate(limit);
        }

        if words.is_empty() {
            NO_MATCHES.to_string()
        } else {
            format!("Closest words: {}", words.join(", "))
        }
    }

    /// Runs until end of input or a quit command.
    ///
    /// # Returns
    ///
    /// The number of queries answered.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> LookupResult<usize> {
        let mut line = String::new();
        let mut answered = 0;

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let query = line.trim();
            if QUIT_COMMANDS.contains(&query) {
                break;
            }

            writeln!(output, "{}", self.answer(query))?;
            answered += 1;
        }

        tracing::debug!(answered, "Interactive session finished");
        Ok(answered)
    }
}
