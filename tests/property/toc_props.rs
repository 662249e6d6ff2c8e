//! Table-of-contents properties.

use proptest::prelude::*;
use postlens::{add_heading_anchors, build_toc, slugify, SECTION_LEVEL, SUBSECTION_LEVEL};

/// A markdown line: a heading at some level, or prose.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ]{1,20}".prop_map(|t| format!("# {}", t)),
        "[A-Za-z ]{1,20}".prop_map(|t| format!("## {}", t)),
        "[A-Za-z ]{1,20}".prop_map(|t| format!("### {}", t)),
        "[A-Za-z ]{1,20}".prop_map(|t| format!("#### {}", t)),
        "[A-Za-z .,]{0,40}",
    ]
}

fn markdown_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..30)
}

/// Reference model: count headings that should survive.
fn expected_counts(lines: &[String]) -> (usize, usize) {
    let mut sections = 0;
    let mut subsections = 0;
    for line in lines {
        let text_present = |prefix: &str| {
            line.strip_prefix(prefix)
                .is_some_and(|rest| !rest.trim().is_empty())
        };
        if text_present("## ") && !line.starts_with("### ") {
            sections += 1;
        } else if text_present("### ") && !line.starts_with("#### ") && sections > 0 {
            subsections += 1;
        }
    }
    (sections, subsections)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the tree has exactly two levels with the right level tags.
    #[test]
    fn prop_toc_two_levels(lines in markdown_strategy()) {
        let toc = build_toc(&lines.join("\n"));
        for section in &toc {
            prop_assert_eq!(section.level, SECTION_LEVEL);
            for child in &section.children {
                prop_assert_eq!(child.level, SUBSECTION_LEVEL);
                prop_assert!(child.children.is_empty());
            }
        }
    }

    /// Property: every kept heading is counted, orphans are not.
    #[test]
    fn prop_toc_counts_match_model(lines in markdown_strategy()) {
        let toc = build_toc(&lines.join("\n"));
        let children: usize = toc.iter().map(|s| s.children.len()).sum();
        prop_assert_eq!((toc.len(), children), expected_counts(&lines));
    }

    /// Property: ids are always the slug of the heading text.
    #[test]
    fn prop_toc_ids_are_slugs(lines in markdown_strategy()) {
        let toc = build_toc(&lines.join("\n"));
        for node in postlens::toc::iter(&toc) {
            prop_assert_eq!(&node.id, &slugify(&node.text));
        }
    }

    /// Property: anchoring keeps the line count and the outline.
    #[test]
    fn prop_anchoring_preserves_structure(lines in markdown_strategy()) {
        let markdown = lines.join("\n");
        let anchored = add_heading_anchors(&markdown);

        prop_assert_eq!(anchored.lines().count(), markdown.lines().count());
        let before = build_toc(&markdown);
        let after = build_toc(&anchored);
        prop_assert_eq!(before.len(), after.len());
    }
}
