#![no_main]

use libfuzzer_sys::fuzz_target;
use postlens::similarity;

/// Cosine similarity of arbitrary text pairs stays in [0, 1] and is symmetric.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mid = text
            .char_indices()
            .nth(text.chars().count() / 2)
            .map_or(text.len(), |(i, _)| i);
        let (a, b) = text.split_at(mid);

        let ab = similarity(a, b);
        let ba = similarity(b, a);

        assert!((0.0..=1.0).contains(&ab), "score out of range: {}", ab);
        assert_eq!(ab.to_bits(), ba.to_bits());
    }
});
