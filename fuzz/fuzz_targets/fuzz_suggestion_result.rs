//! Fuzz target: JSON serialization of `SuggestionResult`.
//!
//! Arbitrary byte sequences become suggestion lists; serialization must
//! never panic and must round-trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use spellserve_core::SuggestionResult;

fuzz_target!(|data: &[u8]| {
    let Some((&flag, rest)) = data.split_first() else {
        return;
    };
    let suggestions: Vec<String> = rest
        .split(|b| *b == 0)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();

    let result = SuggestionResult::new(flag & 1 == 1, suggestions);
    let json = serde_json::to_string(&result).expect("SuggestionResult serialization must not fail");
    let back: SuggestionResult =
        serde_json::from_str(&json).expect("SuggestionResult deserialization must not fail");
    assert_eq!(back, result);
});
