//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a test document with a slug and excerpt derived from the title.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, title: &str, body: &str) -> Document {
    Document {
        id: id.to_string(),
        slug: crate::text::slugify(title),
        title: title.to_string(),
        body: body.to_string(),
        excerpt: Some(format!("Excerpt for {}", title)),
    }
}

/// Create a link target: only id and title matter.
pub fn make_link_target(id: &str, title: &str) -> Document {
    make_doc(id, title, "")
}

/// A document whose body is `n` distinct filler terms plus `shared`.
///
/// Against a query of just `shared`, its cosine score is `1 / sqrt(n + 1)`,
/// which is handy for placing a candidate exactly on either side of a threshold.
pub fn make_diluted_doc(id: &str, shared: &str, n: usize) -> Document {
    let mut words = vec![shared.to_string()];
    words.extend((0..n).map(|i| format!("filler{}", i)));
    Document::new(id, "", words.join(" "))
}
