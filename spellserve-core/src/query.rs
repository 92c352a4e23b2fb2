//! Per-request query and result types.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Name of the query parameter carrying the word to check.
pub const QUERY_PARAM: &str = "q";

/// A word to spell-check, taken verbatim from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    word: String,
}

impl SuggestionQuery {
    /// Creates a query for `word`.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingParameter`] if `word` is empty.
    pub fn new(word: impl Into<String>) -> Result<Self, CoreError> {
        let word = word.into();
        if word.is_empty() {
            return Err(CoreError::MissingParameter { name: QUERY_PARAM });
        }
        Ok(Self { word })
    }

    /// Extracts the query from decoded request parameters.
    ///
    /// When `q` appears more than once the last value wins. Unrelated
    /// parameters are ignored.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingParameter`] if `q` is absent or its
    /// effective value is empty.
    pub fn from_params<I, K, V>(params: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let word = params
            .into_iter()
            .filter(|(key, _)| key.as_ref() == QUERY_PARAM)
            .last()
            .map(|(_, value)| value.into())
            .ok_or(CoreError::MissingParameter { name: QUERY_PARAM })?;
        Self::new(word)
    }

    /// The word exactly as supplied.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Spelling verdict plus the engine's candidate corrections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    misspelt: bool,
    suggestions: Vec<String>,
}

impl SuggestionResult {
    /// Creates a result; `suggestions` must already be in engine order.
    #[must_use]
    pub fn new(misspelt: bool, suggestions: Vec<String>) -> Self {
        Self { misspelt, suggestions }
    }

    /// `true` if the engine did not recognize the word.
    #[must_use]
    pub fn misspelt(&self) -> bool {
        self.misspelt
    }

    /// Candidate corrections, best first.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_word() {
        assert!(matches!(
            SuggestionQuery::new(""),
            Err(CoreError::MissingParameter { name: "q" })
        ));
    }

    #[test]
    fn new_keeps_word_verbatim() {
        let q = match SuggestionQuery::new(" Helo ") {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(q.word(), " Helo ", "no trimming or normalisation is applied");
    }

    #[test]
    fn from_params_without_q_is_missing() {
        let params = vec![("format", "json"), ("lang", "en")];
        assert!(SuggestionQuery::from_params(params).is_err());
    }

    #[test]
    fn from_params_with_empty_q_is_missing() {
        let params = vec![("q", "")];
        assert!(SuggestionQuery::from_params(params).is_err());
    }

    #[test]
    fn from_params_repeated_q_takes_last_value() {
        let params = vec![("q", "first"), ("other", "x"), ("q", "second")];
        let q = match SuggestionQuery::from_params(params) {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(q.word(), "second");
    }

    #[test]
    fn from_params_last_empty_q_overrides_earlier_value() {
        let params = vec![("q", "word"), ("q", "")];
        assert!(SuggestionQuery::from_params(params).is_err());
    }

    #[test]
    fn suggestion_result_serializes_fields_in_order() {
        let result = SuggestionResult::new(true, vec!["Hello".to_owned(), "Help".to_owned()]);
        let json = match serde_json::to_string(&result) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"misspelt":true,"suggestions":["Hello","Help"]}"#);
    }

    #[test]
    fn suggestion_result_empty_suggestions_serialize_as_empty_array() {
        let result = SuggestionResult::new(false, Vec::new());
        let json = match serde_json::to_string(&result) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"misspelt":false,"suggestions":[]}"#);
    }
}
