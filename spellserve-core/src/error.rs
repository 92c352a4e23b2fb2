use crate::locale::Locale;

/// Errors produced by the `spellserve-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A required query parameter was absent or empty.
    #[error("missing or empty query parameter '{name}'")]
    MissingParameter { name: &'static str },

    /// The dictionary engine could not be constructed for the locale.
    #[error("dictionary engine initialization failed for locale {locale}: {reason}")]
    EngineInitialization { locale: Locale, reason: String },
}
