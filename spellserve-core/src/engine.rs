//! Spell-checking engine abstraction.
//!
//! The adapter treats the engine as a black box: it never inspects how a
//! word is judged or how candidates are ranked.

use std::{fs, path::Path};

use tracing::info;

use crate::{error::CoreError, locale::Locale};

/// A dictionary engine bound to one locale.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// read-only across request tasks.
pub trait SpellEngine: Send + Sync {
    /// Returns `true` if the engine's dictionary accepts `word`.
    fn check(&self, word: &str) -> bool;

    /// Returns ranked correction candidates for `word`, best first.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// Hunspell-compatible engine backed by [`spellbook`].
pub struct HunspellEngine {
    locale: Locale,
    dictionary: spellbook::Dictionary,
}

impl HunspellEngine {
    /// Load the `.aff`/`.dic` pair for `locale` from `dir`.
    ///
    /// # Errors
    /// Returns [`CoreError::EngineInitialization`] if either file cannot be
    /// read or the dictionary fails to parse.
    pub fn load(locale: Locale, dir: &Path) -> Result<Self, CoreError> {
        let aff_path = locale.aff_path(dir);
        let dic_path = locale.dic_path(dir);

        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|e| CoreError::EngineInitialization {
                locale,
                reason: format!("cannot read {}: {e}", path.display()),
            })
        };
        let aff = read(&aff_path)?;
        let dic = read(&dic_path)?;

        let engine = Self::from_sources(locale, &aff, &dic)?;
        info!(
            locale = %locale,
            aff = %aff_path.display(),
            dic = %dic_path.display(),
            "dictionary loaded"
        );
        Ok(engine)
    }

    /// Build an engine from in-memory affix and word-list contents.
    ///
    /// # Errors
    /// Returns [`CoreError::EngineInitialization`] if the dictionary fails to parse.
    pub fn from_sources(locale: Locale, aff: &str, dic: &str) -> Result<Self, CoreError> {
        let dictionary = spellbook::Dictionary::new(aff, dic).map_err(|e| {
            CoreError::EngineInitialization { locale, reason: e.to_string() }
        })?;
        Ok(Self { locale, dictionary })
    }

    /// The locale this engine was loaded for.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl SpellEngine for HunspellEngine {
    fn check(&self, word: &str) -> bool {
        self.dictionary.check(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.dictionary.suggest(word, &mut out);
        out
    }
}

impl std::fmt::Debug for HunspellEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HunspellEngine").field("locale", &self.locale).finish_non_exhaustive()
    }
}
