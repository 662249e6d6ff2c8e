//! End-to-end tests for the analyze workflow.

use std::fs;
use std::path::Path;

use postlens::build::{run_analyze, AnalysisReport, REPORT_FILE};
use tempfile::TempDir;

use crate::common::BLOG_DIR;

fn read_report(dir: &Path) -> AnalysisReport {
    let json = fs::read_to_string(dir.join(REPORT_FILE)).expect("Failed to read report");
    serde_json::from_str(&json).expect("Failed to parse report")
}

#[test]
fn test_run_analyze_e2e_basic() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output");

    let report = run_analyze(Path::new(BLOG_DIR), &output, None);
    assert!(report.is_ok(), "Analyze should succeed: {:?}", report.err());
    let report = report.unwrap();

    assert!(output.join(REPORT_FILE).exists(), "analysis.json should be created");
    let written = read_report(&output);
    assert_eq!(report.documents.len(), 5);
    let ids = |r: &AnalysisReport| r.documents.iter().map(|d| d.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&written), ids(&report));
    assert_eq!(written.heading_count(), report.heading_count());
    assert_eq!(written.related_link_count(), report.related_link_count());
}

#[test]
fn test_report_contents() {
    let temp_dir = TempDir::new().unwrap();
    let report = run_analyze(Path::new(BLOG_DIR), temp_dir.path(), None).unwrap();

    let basics = report.get("sourdough-basics").unwrap();
    assert_eq!(basics.slug, "sourdough-basics");
    assert_eq!(basics.reading_time, 1);
    assert!(basics.word_count > 0);
    assert_eq!(basics.related[0].id, "sourdough-starter");
    let toc_ids: Vec<_> = basics.toc.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(toc_ids, vec!["mixing", "baking"]);

    let async_post = report.get("async-rust").unwrap();
    assert_eq!(async_post.duplicate_anchors, vec!["pinning"]);

    for doc in &report.documents {
        assert!(doc.related.len() <= 4);
        assert!(doc.related.iter().all(|r| r.id != doc.id));
    }
}

#[test]
fn test_limit_override() {
    let temp_dir = TempDir::new().unwrap();
    let report = run_analyze(Path::new(BLOG_DIR), temp_dir.path(), Some(1)).unwrap();
    assert!(report.documents.iter().all(|doc| doc.related.len() <= 1));
}

#[test]
fn test_report_json_is_camel_case() {
    let temp_dir = TempDir::new().unwrap();
    run_analyze(Path::new(BLOG_DIR), temp_dir.path(), None).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp_dir.path().join(REPORT_FILE)).unwrap())
            .unwrap();
    let first = &json["documents"][0];
    assert!(first.get("readingTime").is_some());
    assert!(first.get("wordCount").is_some());
    assert!(first.get("duplicateAnchors").is_none());
}

#[test]
fn test_run_analyze_e2e_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output");

    let result = run_analyze(temp_dir.path(), &output, None);

    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("manifest"),
        "Error should mention manifest: {}",
        err
    );
    assert!(!output.join(REPORT_FILE).exists());
}

#[test]
fn test_empty_corpus_writes_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("manifest.json"),
        r#"{"version": 1, "documents": []}"#,
    )
    .unwrap();
    let output = temp_dir.path().join("out");

    let report = run_analyze(temp_dir.path(), &output, None).unwrap();
    assert!(report.documents.is_empty());
    assert!(read_report(&output).documents.is_empty());
}
