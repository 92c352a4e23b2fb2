//! Dictionary adapter: the bridge between request handling and the engine.

use std::path::Path;

use crate::{
    engine::{HunspellEngine, SpellEngine},
    error::CoreError,
    locale::Locale,
    query::{SuggestionQuery, SuggestionResult},
};

/// Read-only wrapper around a locale-bound [`SpellEngine`].
///
/// Built once at startup and shared across requests; it holds no mutable
/// state and does no caching.
pub struct DictionaryAdapter {
    locale: Locale,
    engine: Box<dyn SpellEngine>,
}

impl DictionaryAdapter {
    /// Wrap an already constructed engine.
    #[must_use]
    pub fn new(locale: Locale, engine: impl SpellEngine + 'static) -> Self {
        Self { locale, engine: Box::new(engine) }
    }

    /// Load the Hunspell dictionary for `locale` from `dir`.
    ///
    /// # Errors
    /// Returns [`CoreError::EngineInitialization`] if the locale data is
    /// missing or unparsable. Callers should treat this as fatal.
    pub fn open(locale: Locale, dir: &Path) -> Result<Self, CoreError> {
        let engine = HunspellEngine::load(locale, dir)?;
        Ok(Self::new(locale, engine))
    }

    /// The locale the wrapped engine is bound to.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns `true` if `word` is correctly spelled in the configured locale.
    #[must_use]
    pub fn is_correct(&self, word: &str) -> bool {
        self.engine.check(word)
    }

    /// The engine's candidate corrections for `word`, in the engine's order.
    #[must_use]
    pub fn suggestions_for(&self, word: &str) -> Vec<String> {
        self.engine.suggest(word)
    }

    /// Answer a suggestion query.
    #[must_use]
    pub fn lookup(&self, query: &SuggestionQuery) -> SuggestionResult {
        let word = query.word();
        SuggestionResult::new(!self.is_correct(word), self.suggestions_for(word))
    }
}

impl std::fmt::Debug for DictionaryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryAdapter").field("locale", &self.locale).finish_non_exhaustive()
    }
}
