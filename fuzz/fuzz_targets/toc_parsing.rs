#![no_main]

use libfuzzer_sys::fuzz_target;
use postlens::{add_heading_anchors, build_toc, slugify, SECTION_LEVEL, SUBSECTION_LEVEL};

/// Arbitrary markdown never panics the heading parser, and the tree it builds
/// is always exactly two levels deep.
fuzz_target!(|data: &[u8]| {
    if let Ok(markdown) = std::str::from_utf8(data) {
        let toc = build_toc(markdown);

        for section in &toc {
            assert_eq!(section.level, SECTION_LEVEL);
            assert_eq!(section.id, slugify(&section.text));
            for child in &section.children {
                assert_eq!(child.level, SUBSECTION_LEVEL);
                assert!(child.children.is_empty());
            }
        }

        // Anchoring never adds or removes lines
        let anchored = add_heading_anchors(markdown);
        assert_eq!(anchored.split('\n').count(), markdown.split('\n').count());
    }
});
