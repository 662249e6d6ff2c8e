// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Internal link suggestions: which existing posts should this draft link to?
//!
//! Unlike related posts this is keyword matching, not vector similarity. A
//! candidate earns one point for every token of its *title* that shows up
//! anywhere in the draft, and [`PHRASE_MATCH_BONUS`] more if the whole title
//! appears verbatim. How often a word appears in the draft doesn't matter -
//! the draft side is a set.
//!
//! ```text
//! score = |{ t ∈ tokens(title) : t ∈ set(tokens(draft)) }|   (title dupes count)
//!       + 2 · [lowercase(title) ⊆ lowercase(draft)]
//! ```

use std::collections::HashSet;

use crate::scoring::ranking::rank_top_k;
use crate::scoring::PHRASE_MATCH_BONUS;
use crate::text::tokenize;
use crate::types::{Document, LinkSuggestion};

/// Suggest link targets for `draft` from `candidates`.
///
/// Candidates scoring zero are dropped; the rest are sorted by score (ties keep
/// candidate order) and cut to `limit`. Only the candidates' ids and titles are
/// read.
pub fn suggest_links(draft: &str, candidates: &[Document], limit: usize) -> Vec<LinkSuggestion> {
    suggest_links_excluding(draft, candidates, None, limit)
}

/// Like [`suggest_links`], but never suggests `exclude_id`.
///
/// The editor passes the id of the post being edited so it doesn't suggest
/// linking a post to itself.
pub fn suggest_links_excluding(
    draft: &str,
    candidates: &[Document],
    exclude_id: Option<&str>,
    limit: usize,
) -> Vec<LinkSuggestion> {
    let draft_lower = draft.to_lowercase();
    let draft_tokens: HashSet<String> = tokenize(draft).into_iter().collect();

    let suggestions: Vec<LinkSuggestion> = candidates
        .iter()
        .filter(|candidate| exclude_id != Some(candidate.id.as_str()))
        .filter_map(|candidate| {
            let score = match_score(&candidate.title, &draft_lower, &draft_tokens);
            (score > 0).then(|| LinkSuggestion {
                id: candidate.id.clone(),
                score,
            })
        })
        .collect();

    tracing::debug!(
        candidates = candidates.len(),
        matched = suggestions.len(),
        limit,
        "ranked link suggestions"
    );

    rank_top_k(suggestions, limit)
}

/// Score one title against a pre-processed draft.
fn match_score(title: &str, draft_lower: &str, draft_tokens: &HashSet<String>) -> u32 {
    let token_hits = tokenize(title)
        .iter()
        .filter(|token| draft_tokens.contains(token.as_str()))
        .count() as u32;

    // An empty title is a substring of every draft; it earns no bonus.
    let title_lower = title.to_lowercase();
    let phrase_bonus = if !title_lower.is_empty() && draft_lower.contains(&title_lower) {
        PHRASE_MATCH_BONUS
    } else {
        0
    };

    token_hits + phrase_bonus
}
