use crate::utils::error::{LocaleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Storage key under which the user's locale choice is persisted
pub const PERSISTED_LOCALE_KEY: &str = "user-locale";

/// A language tag such as `"en"` or `"en-US"`
///
/// The tag is kept exactly as written (after trimming), so two locales are
/// equal only when their strings are equal. `unic-langid` is used to reject
/// malformed tags, not to canonicalize them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse and validate a language tag
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::InvalidLocale(tag.to_string()));
        }

        trimmed
            .parse::<LanguageIdentifier>()
            .map_err(|_| LocaleError::InvalidLocale(tag.to_string()))?;

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language-only prefix: everything before the first `-`
    pub fn without_region(&self) -> &str {
        strip_region(&self.0)
    }

    /// Whether the tag carries anything beyond the bare language
    pub fn has_region(&self) -> bool {
        self.0.contains('-')
    }
}

/// Substring of `tag` before the first `-`
pub fn strip_region(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The user's preferred language as reported by the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLocale {
    /// Full tag, e.g. `"de-DE"`
    pub locale: String,

    /// Region-stripped tag, e.g. `"de"`
    pub locale_no_region: String,
}

impl UserLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        let locale = tag.into();
        let locale_no_region = strip_region(&locale).to_string();
        Self {
            locale,
            locale_no_region,
        }
    }
}
