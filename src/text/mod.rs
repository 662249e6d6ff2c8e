// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by the rankers and the heading extractor.

pub mod slug;
pub mod stats;
pub mod tokenize;

pub use slug::{is_valid_anchor, slugify};
pub use stats::{reading_time_minutes, word_count, DEFAULT_WORDS_PER_MINUTE};
pub use tokenize::{is_stop_word, tokenize, TermVector, STOP_WORDS};
