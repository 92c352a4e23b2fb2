//! Process configuration read from the environment at startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use spellserve_core::Locale;

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "SPELLSERVE_LISTEN_ADDR";

/// Environment variable overriding the dictionary directory.
pub const DICT_DIR_VAR: &str = "SPELLSERVE_DICT_DIR";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_DICT_DIR: &str = "/usr/share/hunspell";

/// Settings for a gateway process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the HTTP listener binds to.
    pub listen_addr: String,

    /// Directory containing `<locale>.aff` and `<locale>.dic`.
    pub dictionary_dir: PathBuf,

    /// Locale the dictionary is bound to. Always `en_US`.
    pub locale: Locale,
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup, falling back
    /// to defaults for unset or empty values.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            listen_addr: var(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned()),
            dictionary_dir: var(DICT_DIR_VAR)
                .map_or_else(|| PathBuf::from(DEFAULT_DICT_DIR), PathBuf::from),
            locale: Locale::EnUs,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
