// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering shared by both rankers.
//!
//! Higher score first. Equal scores keep the order the candidates were given
//! in. The sort is stable with no secondary key, so a
//! caller that passes candidates newest-first gets newest-first tiebreaking.

use std::cmp::Ordering;

/// Anything with a score the rankers can sort on.
pub trait Scored {
    type Score: ScoreOrd;

    fn score(&self) -> Self::Score;
}

impl Scored for crate::types::SimilarityResult {
    type Score = f64;

    fn score(&self) -> f64 {
        self.score
    }
}

impl Scored for crate::types::LinkSuggestion {
    type Score = u32;

    fn score(&self) -> u32 {
        self.score
    }
}

/// Descending comparison for float scores.
///
/// `total_cmp` keeps the ordering total; scores are never NaN in practice, but
/// a comparator that can return "unordered" makes sort results unspecified.
#[inline]
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Sort descending by score (stable) and keep the first `limit`.
pub fn rank_top_k<T: Scored>(mut results: Vec<T>, limit: usize) -> Vec<T> {
    results.sort_by(|a, b| <T::Score as ScoreOrd>::descending(a.score(), b.score()));
    results.truncate(limit);
    results
}

/// Descending order for a score type.
pub trait ScoreOrd: Copy {
    fn descending(a: Self, b: Self) -> Ordering;
}

impl ScoreOrd for f64 {
    fn descending(a: f64, b: f64) -> Ordering {
        compare_scores(a, b)
    }
}

impl ScoreOrd for u32 {
    fn descending(a: u32, b: u32) -> Ordering {
        b.cmp(&a)
    }
}
