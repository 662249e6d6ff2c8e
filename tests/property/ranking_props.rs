//! Ranking properties.
//!
//! - Results are sorted, bounded by the limit and above the threshold
//! - Equal scores keep candidate order
//! - Link suggestions ignore how often a word appears in the draft

use proptest::prelude::*;
use postlens::{
    find_similar, rank_top_k, suggest_links, Document, LinkSuggestion, SimilarityQuery,
    RELATED_SCORE_THRESHOLD,
};

use crate::document_strategy;

fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(("[A-Za-z ]{0,20}", document_strategy()), 0..12).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (title, body))| Document::new(format!("d{}", i), title, body))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: related results are sorted, limited, thresholded and exclude the query.
    #[test]
    fn prop_related_well_formed(corpus in corpus_strategy(), limit in 0usize..6, pick in 0usize..12) {
        prop_assume!(!corpus.is_empty());
        let query = &corpus[pick % corpus.len()];
        let results = find_similar(&SimilarityQuery::from(query), &corpus, limit);

        prop_assert!(results.len() <= limit);
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        for result in &results {
            prop_assert!(result.score > RELATED_SCORE_THRESHOLD);
            prop_assert!(result.score <= 1.0);
            prop_assert_ne!(&result.id, &query.id);
        }
    }

    /// Property: ranking is stable for equal scores.
    #[test]
    fn prop_rank_top_k_stable(scores in prop::collection::vec(0u32..4, 0..40), limit in 0usize..50) {
        let items: Vec<LinkSuggestion> = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| LinkSuggestion { id: format!("{:03}", i), score })
            .collect();

        let ranked = rank_top_k(items, limit);
        prop_assert!(ranked.len() <= limit);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].id < pair[1].id, "tie order broken: {:?}", pair);
            }
        }
    }

    /// Property: repeating the draft on a new line never changes link scores.
    #[test]
    fn prop_links_ignore_draft_frequency(corpus in corpus_strategy(), draft in document_strategy()) {
        let once = suggest_links(&draft, &corpus, 20);
        let twice = suggest_links(&format!("{}\n{}", draft, draft), &corpus, 20);
        prop_assert_eq!(once, twice);
    }
}
