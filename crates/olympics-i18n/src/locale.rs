//! Supported locales

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Locales with bundled translations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    English,
    #[serde(rename = "sv-SE")]
    Swedish,
}

impl Locale {
    /// BCP 47 tag for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Swedish => "sv-SE",
        }
    }

    /// Parse a locale from a full or short language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" | "en-US" => Some(Self::English),
            "sv" | "sv-SE" => Some(Self::Swedish),
            _ => None,
        }
    }

    /// Convert to a Fluent language identifier
    pub fn to_language_identifier(&self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// All supported locales, default first
    pub fn all() -> [Self; 2] {
        [Self::English, Self::Swedish]
    }

    /// Bundled Fluent source for this locale
    pub(crate) fn resource_source(&self) -> &'static str {
        match self {
            Self::English => include_str!("../locales/en-US/main.ftl"),
            Self::Swedish => include_str!("../locales/sv-SE/main.ftl"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::InvalidLanguageId(s.to_string()))
    }
}
