// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word counts and reading-time estimates.

/// Average adult reading speed used when a site doesn't configure one.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Count whitespace-separated words. Markup counts as words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes to read `text`, rounded up, never below one.
///
/// A `words_per_minute` of zero is treated as one rather than dividing by zero.
pub fn reading_time_minutes(text: &str, words_per_minute: usize) -> u32 {
    let wpm = words_per_minute.max(1);
    let minutes = word_count(text).div_ceil(wpm);
    minutes.max(1) as u32
}
