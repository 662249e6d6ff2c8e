// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning prose into index terms.
//!
//! Lowercase, blank out everything that isn't a word character, split on
//! whitespace, then drop short words and stop words. Punctuation becomes a
//! space rather than vanishing, so "rust,wasm" is two terms and never "rustwasm".
//!
//! "Word character" is the narrow ASCII definition: `[A-Za-z0-9_]`. Lowercasing
//! runs first and is Unicode-aware, but anything outside ASCII is then stripped.
//! That makes the tokenizer useless for non-Latin scripts - a known limitation,
//! not a bug. Those documents simply produce fewer (or zero) terms.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Shortest token kept, in bytes (which equals characters once non-ASCII has
/// been stripped).
pub const MIN_TOKEN_LEN: usize = 3;

/// High-frequency function words that carry no topical signal.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", //
    "be", "been", "being", "have", "has", "had", "do", "does", "did", //
    "will", "would", "could", "should", "may", "might", "must", "shall", //
    "can", "need", "dare", "ought", "used", "to", "of", "in", "for", //
    "on", "with", "at", "by", "from", "as", "into", "through", "during", //
    "before", "after", "above", "below", "between", "under", "again", //
    "further", "then", "once", "here", "there", "when", "where", "why", //
    "how", "all", "each", "few", "more", "most", "other", "some", "such", //
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", //
    "very", "just", "this", "that", "these", "those", "i", "you", "your", //
    "my", "we", "our", "their", "it", "its", "he", "she", "they", "them",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Is this (already lowercased) word in the stop list?
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// ASCII letters, digits and underscore.
#[inline]
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Normalize raw text into the filtered term sequence used for similarity.
///
/// Order is preserved and duplicates are kept - callers that want a multiset
/// go through [`TermVector`], callers that want membership build a set.
///
/// Never fails. Empty, all-punctuation and all-stop-word input all yield an
/// empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() >= MIN_TOKEN_LEN && !is_stop_word(word))
        .map(str::to_owned)
        .collect()
}

/// Term-frequency vector for one document.
///
/// Counts and the squared norm are kept as integers. Sums of integers are
/// exact, so anything computed from two vectors is independent of `HashMap`
/// iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    counts: HashMap<String, u32>,
    norm_sq: u64,
    total: usize,
}

impl TermVector {
    /// Tokenize `text` and count its terms.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    /// Count an already tokenized sequence.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut total = 0;
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
            total += 1;
        }

        let norm_sq = counts.values().map(|&f| u64::from(f) * u64::from(f)).sum();

        Self {
            counts,
            norm_sq,
            total,
        }
    }

    /// Occurrences of `term` (0 when absent).
    #[inline]
    pub fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Sum of squared counts.
    #[inline]
    pub fn norm_sq(&self) -> u64 {
        self.norm_sq
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }
}
