// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading and per-document analysis.
//!
//! Both halves are embarrassingly parallel: every JSON file parses on its own,
//! and once the corpus is in memory every post's table of contents and
//! reading time are independent. Rayon's `collect` keeps input order, so the
//! output is identical with or without the `parallel` feature.
//!
//! Related posts are the one cross-document step; `find_similar_all` handles
//! its own parallelism.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::error::BuildError;
use crate::related::find_similar_all;
use crate::text::{reading_time_minutes, word_count};
use crate::toc::{build_toc, duplicate_anchors, unanchorable_headings};
use crate::types::{Document, RelatedPosts};

use super::{AnalysisSettings, DocumentAnalysis, InputManifest};

/// Load all documents listed in the manifest, in manifest order.
///
/// Fails on the first unreadable or unparseable file, and on duplicate ids
/// (results are keyed by id, so two posts sharing one would be ambiguous).
pub fn load_documents(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<Document>, BuildError> {
    #[cfg(feature = "parallel")]
    let docs = manifest
        .documents
        .par_iter()
        .map(|filename| load_document(input_dir, filename))
        .collect::<Result<Vec<Document>, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let docs = manifest
        .documents
        .iter()
        .map(|filename| load_document(input_dir, filename))
        .collect::<Result<Vec<Document>, _>>()?;

    check_unique_ids(input_dir, manifest, &docs)?;
    Ok(docs)
}

/// Load all documents in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<Document>, BuildError> {
    let docs = manifest
        .documents
        .par_iter()
        .map(|filename| {
            let doc = load_document(input_dir, filename);
            progress.inc(1);
            doc
        })
        .collect::<Result<Vec<Document>, _>>()?;

    check_unique_ids(input_dir, manifest, &docs)?;
    Ok(docs)
}

fn load_document(input_dir: &Path, filename: &str) -> Result<Document, BuildError> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|source| BuildError::ReadDocument {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str::<Document>(&content).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "failed to parse document");
        BuildError::InvalidDocument { path, source }
    })
}

fn check_unique_ids(
    input_dir: &Path,
    manifest: &InputManifest,
    docs: &[Document],
) -> Result<(), BuildError> {
    let mut seen = HashSet::with_capacity(docs.len());
    for (doc, filename) in docs.iter().zip(&manifest.documents) {
        if !seen.insert(doc.id.as_str()) {
            return Err(BuildError::DuplicateId {
                id: doc.id.clone(),
                path: input_dir.join(filename),
            });
        }
    }
    Ok(())
}

/// Analyze every document: related posts, table of contents, reading time.
///
/// Output is in corpus order, one entry per document.
pub fn analyze_documents(
    docs: &[Document],
    settings: &AnalysisSettings,
) -> Vec<DocumentAnalysis> {
    let related = find_similar_all(docs, settings.related_limit);

    let analyze_one = |(doc, related): (&Document, RelatedPosts)| {
        let toc = build_toc(&doc.body);

        let duplicates = duplicate_anchors(&toc);
        if !duplicates.is_empty() {
            tracing::warn!(
                id = %doc.id,
                anchors = ?duplicates,
                "duplicate heading anchors; links will jump to the first occurrence"
            );
        }
        for heading in unanchorable_headings(&toc) {
            tracing::warn!(
                id = %doc.id,
                heading = %heading.text,
                "heading has no usable anchor"
            );
        }

        DocumentAnalysis {
            id: doc.id.clone(),
            slug: doc.slug.clone(),
            title: doc.title.clone(),
            word_count: word_count(&doc.body),
            reading_time: reading_time_minutes(&doc.body, settings.words_per_minute),
            related: related.related,
            toc,
            duplicate_anchors: duplicates,
        }
    };

    #[cfg(feature = "parallel")]
    let analyses: Vec<DocumentAnalysis> = docs
        .par_iter()
        .zip(related)
        .map(analyze_one)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let analyses: Vec<DocumentAnalysis> = docs.iter().zip(related).map(analyze_one).collect();

    analyses
}
