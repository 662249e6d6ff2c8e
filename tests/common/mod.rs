//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use postlens::build::{load_corpus, Corpus};
use postlens::Document;

// Re-export canonical test utilities from postlens::testing
pub use postlens::testing::{make_diluted_doc, make_doc, make_link_target};

// ============================================================================
// FIXTURE DIRECTORIES
// ============================================================================

/// Root of the checked-in fixture corpora.
pub const FIXTURES_DIR: &str = "data/fixtures";

/// A small, valid blog corpus: two Rust posts, two sourdough posts, one async post.
pub const BLOG_DIR: &str = "data/fixtures/blog";

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

/// Load the blog fixture corpus, panicking on any error.
pub fn blog_corpus() -> Corpus {
    load_corpus(Path::new(BLOG_DIR)).expect("Failed to load blog fixture corpus")
}

// ============================================================================
// IN-MEMORY CORPORA
// ============================================================================

/// The three-post corpus from the widgets walkthrough.
pub fn widgets_corpus() -> Vec<Document> {
    vec![
        make_doc(
            "p1",
            "Getting Started with Widgets",
            "Widgets are great tools for building things.",
        ),
        make_doc("p2", "Widget Basics", "Learn the basics of widgets and tools."),
        make_doc("p3", "Cooking Pasta", "Boil water, add salt."),
    ]
}

/// `n` posts that all share some vocabulary, with a few per-post terms so
/// scores differ.
pub fn overlapping_corpus(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| {
            make_doc(
                &format!("doc{}", i),
                &format!("Rust notes {}", i),
                &format!(
                    "rust ownership borrowing {} topic{} extra{} {}",
                    "lifetimes ".repeat(i % 3),
                    i,
                    i % 4,
                    "traits ".repeat(i % 5)
                ),
            )
        })
        .collect()
}

/// Ids of a ranked result list, for compact assertions.
pub fn ids<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    items.into_iter().map(|s| s.as_ref().to_string()).collect()
}
