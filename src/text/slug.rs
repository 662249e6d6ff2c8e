// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heading text → anchor identifier.
//!
//! Renderers that put `id` attributes on headings must produce exactly the same
//! string, or table-of-contents links land nowhere. Treat the output format as
//! frozen.
//!
//! # Algorithm
//!
//! 1. Lowercase
//! 2. Drop everything except word characters, whitespace and `-`
//! 3. Collapse each run of whitespace and hyphens to a single `-`
//! 4. Trim `-` from both ends
//!
//! Steps 3 and 4 happen in one pass: a separator is only emitted when another
//! kept character follows it, and never before the first one.

use super::tokenize::is_word_char;

/// Derive a URL/anchor-safe identifier from arbitrary text.
///
/// Total and deterministic. Empty input (or input made only of punctuation)
/// gives an empty string. Already-slugified text is a fixed point.
///
/// ```
/// use postlens::slugify;
///
/// assert_eq!(slugify("Getting Started!"), "getting-started");
/// assert_eq!(slugify("  Rust -- the  Good Parts "), "rust-the-good-parts");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.chars() {
        if c.is_whitespace() || c == '-' {
            pending_separator = true;
        } else if is_word_char(c) {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
        // Anything else is dropped without acting as a separator.
    }

    slug
}

/// Check if an identifier is usable as an anchor.
///
/// Valid characters: lowercase ASCII alphanumeric, hyphen, underscore.
/// Everything [`slugify`] returns passes, except the empty string.
pub fn is_valid_anchor(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
