// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind "related posts": cosine similarity over term frequencies.
//!
//! Each document becomes a vector with one dimension per vocabulary term and
//! the term's count as the coordinate. The score is the cosine of the angle
//! between two such vectors: 1 for identical term distributions, 0 when they
//! share nothing. Counts are non-negative, so the result never goes below 0,
//! and Cauchy-Schwarz keeps it at or below 1.
//!
//! # Determinism
//!
//! The dot product and both squared norms are sums of integer products, so we
//! accumulate them as `u64`. Integer addition is exact and associative, which
//! means the result does not depend on `HashMap` iteration order or on which
//! argument comes first. Only the final division touches floating point:
//!
//! ```text
//! score = dot / sqrt(|a|² · |b|²)
//! ```
//!
//! Taking one square root of the product (rather than multiplying two roots)
//! also makes `cosine(a, a)` exactly `1.0`, since `sqrt(x²) == x` in IEEE 754.

use crate::text::TermVector;

// =============================================================================
// RANKING CONSTANTS
// =============================================================================

/// Related-posts inclusion threshold. Candidates scoring at or below this are noise.
pub const RELATED_SCORE_THRESHOLD: f64 = 0.05;

/// Bonus for a link target whose whole title appears verbatim in the draft.
pub const PHRASE_MATCH_BONUS: u32 = 2;

/// Number of related posts shown under an article.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Number of link suggestions shown in the editor.
pub const DEFAULT_LINK_LIMIT: usize = 5;

/// Cosine similarity between two term vectors, in `[0, 1]`.
///
/// Returns exactly `0.0` if either side has no terms.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Iterate the smaller side; terms missing from either vector contribute 0.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: u64 = small
        .iter()
        .map(|(term, f1)| u64::from(f1) * u64::from(large.count(term)))
        .sum();

    let norms = a.norm_sq() as f64 * b.norm_sq() as f64;
    // Unreachable after the emptiness check; kept so a zero norm can never divide.
    if norms == 0.0 {
        return 0.0;
    }

    dot as f64 / norms.sqrt()
}

/// Tokenize two texts and compare them.
///
/// ```
/// use postlens::similarity;
///
/// assert_eq!(similarity("", "anything"), 0.0);
/// assert_eq!(similarity("widgets gadgets", "widgets gadgets"), 1.0);
/// ```
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    cosine(&TermVector::from_text(text_a), &TermVector::from_text(text_b))
}
