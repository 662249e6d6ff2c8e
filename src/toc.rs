// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Table of contents from markdown headings.
//!
//! Only `##` and `###` are extracted: `##` becomes a top-level entry, `###`
//! nests under the most recent `##`. One pass, one piece of state - the index
//! of the current parent.
//!
//! ```text
//! ## Intro          → Intro
//! ## Details        → Details
//! ### Setup         →   └─ Setup
//! ```
//!
//! A `###` before any `##` has nowhere to go and is dropped. So are `#`,
//! `####` and deeper, and anything that isn't a heading line. The parser is
//! line-based and does not know about fenced code blocks.
//!
//! Heading ids are [`slugify`] of the heading text, which must match what the
//! renderer puts on the heading element. Two headings with the same text get
//! the same id; [`duplicate_anchors`] reports those without renaming them.

use std::collections::HashSet;

use crate::text::{is_valid_anchor, slugify};
use crate::types::{HeadingNode, SECTION_LEVEL, SUBSECTION_LEVEL};

/// Build the two-level heading tree for a markdown document.
///
/// Document order is preserved at both levels. Never fails: a document with no
/// headings gives an empty vector.
pub fn build_toc(markdown: &str) -> Vec<HeadingNode> {
    let mut toc: Vec<HeadingNode> = Vec::new();
    let mut parent: Option<usize> = None;

    for line in markdown.lines() {
        let Some((level, text)) = parse_heading(line) else {
            continue;
        };

        match level {
            SECTION_LEVEL => {
                toc.push(HeadingNode::new(text, SECTION_LEVEL));
                parent = Some(toc.len() - 1);
            }
            _ => match parent {
                Some(idx) => toc[idx]
                    .children
                    .push(HeadingNode::new(text, SUBSECTION_LEVEL)),
                None => {
                    tracing::debug!(heading = text, "dropping subsection before first section");
                }
            },
        }
    }

    toc
}

/// Split a line into `(level, text)` if it is a `##` or `###` heading.
///
/// The marker must be exactly two or three `#`, followed by at least one space
/// or tab, followed by non-blank text. Text is trimmed; inline markup is kept.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes != usize::from(SECTION_LEVEL) && hashes != usize::from(SUBSECTION_LEVEL) {
        return None;
    }

    let rest = &line[hashes..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some((hashes as u8, text))
}

/// Depth-first walk over every node: each section, then its subsections.
pub fn iter(toc: &[HeadingNode]) -> impl Iterator<Item = &HeadingNode> {
    toc.iter()
        .flat_map(|node| std::iter::once(node).chain(node.children.iter()))
}

/// Anchor ids used by more than one heading, in first-seen order.
///
/// The renderer will emit duplicate `id` attributes for these, and links to the
/// second occurrence will jump to the first.
pub fn duplicate_anchors(toc: &[HeadingNode]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for node in iter(toc) {
        if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
            duplicates.push(node.id.clone());
        }
    }

    duplicates
}

/// Headings whose text slugifies to nothing usable (e.g. `## 🚀` or `## ???`).
pub fn unanchorable_headings(toc: &[HeadingNode]) -> Vec<&HeadingNode> {
    iter(toc).filter(|node| !is_valid_anchor(&node.id)).collect()
}

/// Append `{#slug}` to every `##` / `###` heading line.
///
/// For markdown renderers that support heading attributes, this pins the
/// rendered ids to the same slugs [`build_toc`] produces. Non-heading lines,
/// and line endings (`\n` or `\r\n`), are left untouched.
///
/// ```
/// use postlens::add_heading_anchors;
///
/// assert_eq!(
///     add_heading_anchors("## Getting Started\ntext"),
///     "## Getting Started {#getting-started}\ntext"
/// );
/// ```
pub fn add_heading_anchors(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 8);

    for (i, raw_line) in markdown.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let (line, cr) = match raw_line.strip_suffix('\r') {
            Some(line) => (line, "\r"),
            None => (raw_line, ""),
        };

        match parse_heading(line) {
            Some((level, text)) => {
                for _ in 0..level {
                    out.push('#');
                }
                out.push(' ');
                out.push_str(text);
                out.push_str(" {#");
                out.push_str(&slugify(text));
                out.push('}');
            }
            None => out.push_str(line),
        }
        out.push_str(cr);
    }

    out
}
