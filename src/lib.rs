// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content analysis for blogs: related posts, internal link suggestions, and
//! tables of contents with stable heading anchors.
//!
//! Everything in the core is a pure function over in-memory text. No I/O, no
//! shared mutable state, no errors - empty or odd input maps to an empty result
//! or a zero score. The `build` module is the only part that touches the file
//! system, and it sits on top of the core rather than inside it.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │ text::tokenize │────▶│ scoring::core │────▶│ related (cosine) │
//! │ (stop words,   │     │ (cosine over  │     │ links (keywords) │
//! │  TermVector)   │────▶│  TermVector)  │     │ scoring::ranking │
//! └────────────────┘     └───────────────┘     └──────────────────┘
//!
//! ┌────────────────┐     ┌───────────────┐
//! │   text::slug   │────▶│      toc      │   (## / ### → two-level tree)
//! └────────────────┘     └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use postlens::{build_toc, find_similar, suggest_links, Document, SimilarityQuery};
//!
//! let posts = vec![
//!     Document::new("p2", "Widget Basics", "Learn the basics of widgets and tools."),
//!     Document::new("p3", "Unrelated Topic", "Completely different subject matter here."),
//! ];
//! let current = Document::new(
//!     "p1",
//!     "Getting Started with Widgets",
//!     "Widgets are great tools for building things.",
//! );
//!
//! let related = find_similar(&SimilarityQuery::from(&current), &posts, 4);
//! assert_eq!(related[0].id, "p2");
//!
//! let links = suggest_links("A draft about widget basics", &posts, 5);
//! assert_eq!(links[0].id, "p2");
//!
//! let toc = build_toc("## Intro\n## Details\n### Setup");
//! assert_eq!(toc[1].children[0].id, "setup");
//! ```

pub mod build;
pub mod error;
pub mod links;
pub mod related;
pub mod scoring;
pub mod testing;
pub mod text;
pub mod toc;
mod types;

// Re-exports for public API
pub use error::BuildError;
pub use links::{suggest_links, suggest_links_excluding};
pub use related::{find_similar, find_similar_all};
pub use scoring::ranking::{compare_scores, rank_top_k, Scored};
pub use scoring::{
    cosine, similarity, DEFAULT_LINK_LIMIT, DEFAULT_RELATED_LIMIT, PHRASE_MATCH_BONUS,
    RELATED_SCORE_THRESHOLD,
};
pub use text::{
    is_stop_word, is_valid_anchor, reading_time_minutes, slugify, tokenize, word_count,
    TermVector, DEFAULT_WORDS_PER_MINUTE, STOP_WORDS,
};
pub use toc::{add_heading_anchors, build_toc, duplicate_anchors, parse_heading};
pub use types::{
    Document, HeadingNode, LinkSuggestion, RelatedPosts, SimilarityQuery, SimilarityResult,
    SECTION_LEVEL, SUBSECTION_LEVEL,
};
