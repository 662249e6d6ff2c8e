#![no_main]

use libfuzzer_sys::fuzz_target;
use postlens::{is_valid_anchor, slugify};

/// Slugs are stable under re-slugifying and only ever contain anchor-safe
/// characters, for any UTF-8 input.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let slug = slugify(text);

        // INVARIANT: idempotent
        assert_eq!(slugify(&slug), slug);

        // INVARIANT: empty or a valid anchor, never edged with hyphens
        assert!(slug.is_empty() || is_valid_anchor(&slug));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }
});
