// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Related posts": rank a corpus by full-text cosine similarity to one post.
//!
//! Pipeline per call:
//!
//! ```text
//! query title+body ──tokenize──▶ TermVector ─┐
//!                                            ├─ cosine ─▶ > 0.05 ? ─▶ stable sort ─▶ top K
//! candidate title+body ─tokenize─▶ TermVector ┘
//! ```
//!
//! The query is tokenized once. Candidates are tokenized per call; nothing is
//! cached between calls, so the corpus can change freely between requests.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::scoring::ranking::rank_top_k;
use crate::scoring::{cosine, RELATED_SCORE_THRESHOLD};
use crate::text::TermVector;
use crate::types::{Document, RelatedPosts, SimilarityQuery, SimilarityResult};

/// Rank `candidates` by similarity to `query`.
///
/// - Candidates with the query's id are skipped (when the query has one).
/// - Scores at or below [`RELATED_SCORE_THRESHOLD`] are dropped.
/// - Ties keep candidate order.
///
/// Empty candidate sets and empty query text both produce an empty result.
pub fn find_similar(
    query: &SimilarityQuery<'_>,
    candidates: &[Document],
    limit: usize,
) -> Vec<SimilarityResult> {
    let query_vector = TermVector::from_text(&query.full_text());
    let results = score_candidates(query.id, &query_vector, candidates);

    tracing::debug!(
        query_id = query.id.unwrap_or("<none>"),
        candidates = candidates.len(),
        above_threshold = results.len(),
        limit,
        "ranked related posts"
    );

    rank_top_k(results, limit)
}

/// Related posts for every document in the corpus, in corpus order.
///
/// Each document is ranked against all the others. Term vectors are built once
/// per document rather than once per pair, which turns the quadratic part of
/// the work into hash lookups. Runs in parallel with the `parallel` feature.
pub fn find_similar_all(corpus: &[Document], limit: usize) -> Vec<RelatedPosts> {
    #[cfg(feature = "parallel")]
    let vectors: Vec<TermVector> = corpus
        .par_iter()
        .map(|doc| TermVector::from_text(&doc.full_text()))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let vectors: Vec<TermVector> = corpus
        .iter()
        .map(|doc| TermVector::from_text(&doc.full_text()))
        .collect();

    let rank_one = |(doc, vector): (&Document, &TermVector)| {
        let results: Vec<SimilarityResult> = corpus
            .iter()
            .zip(&vectors)
            .filter(|(candidate, _)| candidate.id != doc.id)
            .filter_map(|(candidate, candidate_vector)| {
                include(&candidate.id, cosine(vector, candidate_vector))
            })
            .collect();

        RelatedPosts {
            id: doc.id.clone(),
            related: rank_top_k(results, limit),
        }
    };

    #[cfg(feature = "parallel")]
    let all: Vec<RelatedPosts> = corpus
        .par_iter()
        .zip(vectors.par_iter())
        .map(rank_one)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let all: Vec<RelatedPosts> = corpus.iter().zip(vectors.iter()).map(rank_one).collect();

    tracing::debug!(
        documents = corpus.len(),
        limit,
        "ranked related posts for corpus"
    );
    all
}

fn score_candidates(
    query_id: Option<&str>,
    query_vector: &TermVector,
    candidates: &[Document],
) -> Vec<SimilarityResult> {
    candidates
        .iter()
        .filter(|candidate| query_id != Some(candidate.id.as_str()))
        .filter_map(|candidate| {
            let candidate_vector = TermVector::from_text(&candidate.full_text());
            include(&candidate.id, cosine(query_vector, &candidate_vector))
        })
        .collect()
}

#[inline]
fn include(id: &str, score: f64) -> Option<SimilarityResult> {
    (score > RELATED_SCORE_THRESHOLD).then(|| SimilarityResult {
        id: id.to_string(),
        score,
    })
}
