// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model: documents going in, scored ids and heading trees coming out.
//!
//! | Type               | Role                                             |
//! |--------------------|--------------------------------------------------|
//! | `Document`         | A published post as the analysis sees it         |
//! | `SimilarityQuery`  | The post we want neighbours for                  |
//! | `SimilarityResult` | `{id, score}` from the related-posts ranker      |
//! | `LinkSuggestion`   | `{id, score}` from the link-target ranker        |
//! | `HeadingNode`      | One entry in a two-level table of contents       |
//!
//! # Invariants
//!
//! - **SimilarityResult**: `0.05 < score ≤ 1`. Anything at or below the
//!   threshold never leaves the ranker.
//! - **LinkSuggestion**: `score ≥ 1`.
//! - **HeadingNode**: `level ∈ {2, 3}`, and only level-2 nodes have children.
//!
//! Nothing here is persisted. Results are snapshots of one call.

use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A published post.
///
/// The id is opaque: it is compared for equality (self-exclusion) and copied
/// into results, nothing else. `body` accepts `content` as an alias because
/// that's what most CMS exports call it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    /// URL slug of the post itself (not used for scoring)
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(alias = "content")]
    pub body: String,
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: String::new(),
            title: title.into(),
            body: body.into(),
            excerpt: None,
        }
    }

    /// Title and body joined with a space - the text the similarity ranker scores.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// The document we're finding neighbours for.
///
/// Separate from [`Document`] because the query may not exist yet (a draft with
/// no id) - in which case nothing is self-excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityQuery<'a> {
    pub id: Option<&'a str>,
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> SimilarityQuery<'a> {
    /// Query without an id: no candidate is excluded.
    pub fn anonymous(title: &'a str, body: &'a str) -> Self {
        Self {
            id: None,
            title,
            body,
        }
    }

    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

impl<'a> From<&'a Document> for SimilarityQuery<'a> {
    fn from(doc: &'a Document) -> Self {
        Self {
            id: Some(doc.id.as_str()),
            title: &doc.title,
            body: &doc.body,
        }
    }
}

// =============================================================================
// RANKING RESULTS
// =============================================================================

/// A candidate that cleared the related-posts threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub id: String,
    /// Cosine similarity in `(0.05, 1]`
    pub score: f64,
}

/// Related posts for one document of a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPosts {
    pub id: String,
    pub related: Vec<SimilarityResult>,
}

/// An existing post the author might want to link to from a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSuggestion {
    pub id: String,
    /// Title tokens found in the draft, plus the phrase bonus
    pub score: u32,
}

// =============================================================================
// TABLE OF CONTENTS
// =============================================================================

/// Heading level of a top-level table-of-contents entry (`##`).
pub const SECTION_LEVEL: u8 = 2;

/// Heading level of a nested table-of-contents entry (`###`).
pub const SUBSECTION_LEVEL: u8 = 3;

/// One heading in the table of contents.
///
/// `id` is the slug of `text` and doubles as the anchor the renderer must put
/// on the heading element. `text` is verbatim: inline markup stays in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingNode {
    pub id: String,
    pub text: String,
    pub level: u8,
    #[serde(default)]
    pub children: Vec<HeadingNode>,
}

impl HeadingNode {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        let text = text.into();
        Self {
            id: crate::text::slugify(&text),
            text,
            level,
            children: Vec::new(),
        }
    }

    /// Top-level (`##`) entry?
    #[inline]
    pub fn is_section(&self) -> bool {
        self.level == SECTION_LEVEL
    }
}
