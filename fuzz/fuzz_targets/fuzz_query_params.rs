//! Fuzz target: `SuggestionQuery::from_params` over arbitrary parameter lists.
//!
//! Splits the input into `key=value` pairs on `&` and checks that extraction
//! never panics and only accepts non-empty words.

#![no_main]

use libfuzzer_sys::fuzz_target;
use spellserve_core::SuggestionQuery;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let pairs: Vec<(&str, &str)> = raw
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect();

    let expected = pairs.iter().rev().find(|(k, _)| *k == "q").map(|(_, v)| *v);

    match SuggestionQuery::from_params(pairs) {
        Ok(query) => {
            assert!(!query.word().is_empty(), "accepted queries must be non-empty");
            assert_eq!(Some(query.word()), expected, "last q must win");
        }
        Err(_) => assert!(expected.map_or(true, str::is_empty)),
    }
});
