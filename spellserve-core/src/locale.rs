use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Language/region identifier governing which words count as correctly spelled.
///
/// The service is bound to a single locale; the enum exists so the
/// identifier and its dictionary file names live in one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Locale {
    /// US English.
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
}

impl Locale {
    /// Returns the Hunspell-style identifier, e.g. `"en_US"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
        }
    }

    /// Path of the affix file for this locale inside `dir`.
    #[must_use]
    pub fn aff_path(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.aff", self.tag()))
    }

    /// Path of the word list for this locale inside `dir`.
    #[must_use]
    pub fn dic_path(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.dic", self.tag()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
