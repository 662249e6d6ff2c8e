use serde::{Deserialize, Serialize};

use crate::types::{HeadingNode, SimilarityResult};

/// Everything the analysis knows about one post.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub word_count: usize,
    /// Minutes, rounded up, at least 1
    pub reading_time: u32,
    pub related: Vec<SimilarityResult>,
    pub toc: Vec<HeadingNode>,
    /// Heading anchors that occur more than once in this post
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_anchors: Vec<String>,
}

/// The `analysis.json` written by `postlens analyze`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub version: u32,
    pub documents: Vec<DocumentAnalysis>,
}

impl AnalysisReport {
    pub fn get(&self, id: &str) -> Option<&DocumentAnalysis> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Total number of related-post links across the corpus.
    pub fn related_link_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.related.len()).sum()
    }

    /// Total number of table-of-contents entries across the corpus.
    pub fn heading_count(&self) -> usize {
        self.documents
            .iter()
            .map(|doc| crate::toc::iter(&doc.toc).count())
            .sum()
    }
}
