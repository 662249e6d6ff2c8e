//! Tests for document loading.

use std::fs;
use std::path::Path;

use postlens::build::{load_corpus, load_documents, load_manifest};
use postlens::BuildError;
use tempfile::TempDir;

use crate::common::{fixture_path, BLOG_DIR};

#[test]
fn test_load_blog_documents_in_manifest_order() {
    let input = Path::new(BLOG_DIR);
    let manifest = load_manifest(input).unwrap();
    let docs = load_documents(input, &manifest).unwrap();

    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "rust-ownership",
            "rust-borrowing",
            "sourdough-basics",
            "sourdough-starter",
            "async-rust"
        ]
    );
}

#[test]
fn test_content_alias_and_optional_fields() {
    let corpus = load_corpus(Path::new(BLOG_DIR)).unwrap();

    let ownership = corpus.find("rust-ownership").unwrap();
    assert!(ownership.body.starts_with("## Moves"));
    assert_eq!(ownership.excerpt.as_deref(), Some("Moves, copies and drops."));

    let borrowing = corpus.find("rust-borrowing").unwrap();
    assert!(borrowing.excerpt.is_none());
}

#[test]
fn test_unknown_id_lookup() {
    let corpus = load_corpus(Path::new(BLOG_DIR)).unwrap();
    let err = corpus.find("nope").unwrap_err();
    assert!(matches!(err, BuildError::UnknownDocument(ref id) if id == "nope"));
}

#[test]
fn test_missing_document_file() {
    let input = fixture_path("missing-doc");
    let manifest = load_manifest(&input).unwrap();
    let err = load_documents(&input, &manifest).unwrap_err();

    assert!(matches!(err, BuildError::ReadDocument { .. }));
    assert!(
        err.to_string().contains("missing.json"),
        "Error should name the missing file: {}",
        err
    );
}

#[test]
fn test_duplicate_ids_rejected() {
    let input = fixture_path("duplicate-id");
    let manifest = load_manifest(&input).unwrap();

    match load_documents(&input, &manifest) {
        Err(BuildError::DuplicateId { id, path }) => {
            assert_eq!(id, "same");
            assert!(path.ends_with("second.json"));
        }
        other => panic!("Expected DuplicateId, got {:?}", other),
    }
}

#[test]
fn test_malformed_document() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("manifest.json"),
        r#"{"version": 1, "documents": ["bad.json"]}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("bad.json"), r#"{"id": "x"}"#).unwrap();

    let result = load_corpus(temp_dir.path());
    assert!(matches!(result, Err(BuildError::InvalidDocument { .. })));
}
