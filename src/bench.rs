//! Benchmarking support for the fuzzy lookup crate.
//!
//! Provides deterministic synthetic dictionaries so benchmark runs are
//! comparable across machines and commits.

use crate::data_structures::trie::Trie;

/// Generates `count` distinct words over `alphabet`, enumerating lengths
/// `min_len..=max_len` in lexicographic order.
///
/// Fewer than `count` words are returned if the space is exhausted.
pub fn synthetic_words(count: usize, alphabet: &[char], min_len: usize, max_len: usize) -> Vec<String> {
    let mut words = Vec::with_capacity(count);
    if alphabet.is_empty() {
        return words;
    }

    for len in min_len..=max_len {
        let mut digits = vec![0usize; len];
        loop {
            if words.len() == count {
                return words;
            }
            words.push(digits.iter().map(|&d| alphabet[d]).collect());

            // Odometer increment, least significant digit last
            let mut pos = len;
            loop {
                if pos == 0 {
                    break;
                }
                pos -= 1;
                digits[pos] += 1;
                if digits[pos] < alphabet.len() {
                    break;
                }
                digits[pos] = 0;
            }
            if digits.iter().all(|&d| d == 0) {
                break;
            }
        }
    }
    words
}

/// Builds a trie over [`synthetic_words`].
pub fn synthetic_trie(count: usize, alphabet: &[char], min_len: usize, max_len: usize) -> Trie {
    synthetic_words(count, alphabet, min_len, max_len).into_iter().collect()
}
