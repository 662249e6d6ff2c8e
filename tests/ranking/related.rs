//! Tests for related-post ranking.

use crate::common::{blog_corpus, ids, make_doc, widgets_corpus};
use postlens::{find_similar, find_similar_all, similarity, SimilarityQuery};

#[test]
fn test_widgets_walkthrough() {
    let corpus = widgets_corpus();
    let results = find_similar(&SimilarityQuery::from(&corpus[0]), &corpus, 5);

    // p2 shares "widgets" and "tools"; p3 shares nothing
    assert_eq!(ids(results.iter().map(|r| &r.id)), vec!["p2"]);
    let expected = 3.0 / 80f64.sqrt();
    assert!((results[0].score - expected).abs() < 1e-12);
}

#[test]
fn test_query_never_returns_itself() {
    let corpus = widgets_corpus();
    for doc in &corpus {
        let results = find_similar(&SimilarityQuery::from(doc), &corpus, 10);
        assert!(
            results.iter().all(|r| r.id != doc.id),
            "{} appeared in its own related list",
            doc.id
        );
    }
}

#[test]
fn test_anonymous_query_can_match_every_candidate() {
    let corpus = widgets_corpus();
    let query = SimilarityQuery::anonymous("Widgets", "widgets and tools");
    let results = find_similar(&query, &corpus, 10);
    // p1 repeats "widgets" in title and body, so it outscores p2
    assert_eq!(ids(results.iter().map(|r| &r.id)), vec!["p1", "p2"]);
}

#[test]
fn test_scores_are_descending_and_match_similarity() {
    let corpus = blog_corpus();
    let query = corpus.find("sourdough-basics").unwrap();
    let results = find_similar(&SimilarityQuery::from(query), &corpus.documents, 4);

    assert!(!results.is_empty());
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    for result in &results {
        let candidate = corpus.find(&result.id).unwrap();
        let expected = similarity(&query.full_text(), &candidate.full_text());
        assert_eq!(result.score.to_bits(), expected.to_bits());
    }
}

#[test]
fn test_blog_fixture_neighbours() {
    let corpus = blog_corpus();

    let bread = corpus.find("sourdough-basics").unwrap();
    let results = find_similar(&SimilarityQuery::from(bread), &corpus.documents, 4);
    assert_eq!(results[0].id, "sourdough-starter");

    let rust = corpus.find("rust-ownership").unwrap();
    let mut related = ids(find_similar(&SimilarityQuery::from(rust), &corpus.documents, 4)
        .iter()
        .map(|r| &r.id));
    related.sort();
    assert_eq!(related, vec!["async-rust", "rust-borrowing"]);
}

#[test]
fn test_limit_truncates_after_sorting() {
    let query = make_doc("q", "Rust", "rust ownership borrowing lifetimes");
    let corpus = vec![
        make_doc("weak", "Cooking", "rust pans need seasoning and oil"),
        make_doc("strong", "Ownership", "rust ownership borrowing lifetimes"),
        make_doc("mid", "Borrowing", "rust borrowing checker"),
    ];

    let top1 = find_similar(&SimilarityQuery::from(&query), &corpus, 1);
    assert_eq!(ids(top1.iter().map(|r| &r.id)), vec!["strong"]);

    let none = find_similar(&SimilarityQuery::from(&query), &corpus, 0);
    assert!(none.is_empty());
}

#[test]
fn test_empty_inputs() {
    let corpus = widgets_corpus();
    assert!(find_similar(&SimilarityQuery::anonymous("", ""), &corpus, 5).is_empty());
    assert!(find_similar(&SimilarityQuery::from(&corpus[0]), &[], 5).is_empty());
    assert!(find_similar_all(&[], 5).is_empty());
}

#[test]
fn test_batch_matches_single_queries() {
    let corpus = blog_corpus();
    let all = find_similar_all(&corpus.documents, 3);

    assert_eq!(all.len(), corpus.documents.len());
    for (doc, batch) in corpus.documents.iter().zip(&all) {
        assert_eq!(batch.id, doc.id);
        let single = find_similar(&SimilarityQuery::from(doc), &corpus.documents, 3);
        assert_eq!(batch.related, single, "batch and single disagree for {}", doc.id);
    }
}
