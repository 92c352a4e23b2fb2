//! Core types for the spellserve suggestion service.
//!
//! Defines the dictionary adapter that fronts a black-box spell-checking
//! engine, the per-request query/result types, and the static endpoint
//! catalog.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod locale;
pub mod query;

pub use catalog::EndpointCatalog;
pub use dictionary::DictionaryAdapter;
pub use engine::{HunspellEngine, SpellEngine};
pub use error::CoreError;
pub use locale::Locale;
pub use query::{SuggestionQuery, SuggestionResult, QUERY_PARAM};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn locale_display_uses_hunspell_tag() {
        assert_eq!(Locale::EnUs.to_string(), "en_US");
        assert_eq!(Locale::default(), Locale::EnUs);
    }

    #[test]
    fn locale_dictionary_paths_are_named_after_tag() {
        let dir = Path::new("/usr/share/hunspell");
        assert_eq!(Locale::EnUs.aff_path(dir), Path::new("/usr/share/hunspell/en_US.aff"));
        assert_eq!(Locale::EnUs.dic_path(dir), Path::new("/usr/share/hunspell/en_US.dic"));
    }

    #[test]
    fn locale_serializes_as_tag() {
        let json = match serde_json::to_string(&Locale::EnUs) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "\"en_US\"");
    }

    #[test]
    fn endpoint_catalog_lists_suggest_template() {
        let catalog = EndpointCatalog::standard();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("suggest"), Some("/suggest?q={query}"));
        assert_eq!(catalog.get("suggestions"), None, "debug variant is not published");
    }

    #[test]
    fn endpoint_catalog_serializes_as_plain_object() {
        let json = match serde_json::to_string(&EndpointCatalog::default()) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"suggest":"/suggest?q={query}"}"#);
    }

    #[test]
    fn core_error_display_names_parameter() {
        let err = CoreError::MissingParameter { name: QUERY_PARAM };
        assert_eq!(err.to_string(), "missing or empty query parameter 'q'");
    }

    #[test]
    fn core_error_initialization_display_names_locale() {
        let err = CoreError::EngineInitialization {
            locale: Locale::EnUs,
            reason: "no such file".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("en_US"), "Display must include the locale");
        assert!(msg.contains("no such file"), "Display must include the reason");
    }
}
