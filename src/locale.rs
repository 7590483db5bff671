//! Simplified `language[_COUNTRY[_VARIANT]]` locales.
//!
//! Only underscore tokenization is modelled; this is not a BCP-47 parser.

pub mod cache;
pub mod matching;

pub use cache::LocaleCache;
pub use matching::{MatchLevel, get_match_level, is_match, match_level, match_level_sorted_string};

use crate::lang::data::RTL_LANGUAGES;
use std::fmt;

/// Borrowed view of a locale string split on `_` into at most three parts.
///
/// The variant keeps any further underscores: `"en_US_a_b"` has variant `"a_b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleTag<'a> {
    pub language: &'a str,
    pub country: Option<&'a str>,
    pub variant: Option<&'a str>,
}

impl<'a> LocaleTag<'a> {
    pub fn parse(tag: &'a str) -> Self {
        let mut parts = tag.splitn(3, '_');
        // splitn always yields at least one item, possibly empty
        let language = parts.next().unwrap_or_default();
        let country = parts.next();
        let variant = parts.next();
        Self {
            language,
            country,
            variant,
        }
    }

    /// Number of parts present, 1 to 3.
    #[inline]
    pub fn part_count(&self) -> usize {
        1 + usize::from(self.country.is_some()) + usize::from(self.variant.is_some())
    }
}

/// An owned locale value.
///
/// Construction canonicalises the parts: language lowercased (with the legacy
/// `he` → `iw` mapping), country uppercased, variant untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    pub fn new(language: &str, country: &str, variant: &str) -> Self {
        let language = language.to_ascii_lowercase();
        let language = match language.as_str() {
            "he" => "iw".to_string(),
            _ => language,
        };
        Self {
            language,
            country: country.to_ascii_uppercase(),
            variant: variant.to_string(),
        }
    }

    /// The locale with no language, country or variant.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_tag(tag: &LocaleTag<'_>) -> Self {
        Self::new(
            tag.language,
            tag.country.unwrap_or_default(),
            tag.variant.unwrap_or_default(),
        )
    }

    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[inline]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[inline]
    pub fn variant(&self) -> &str {
        &self.variant
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.language.is_empty() && self.country.is_empty() && self.variant.is_empty()
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::from_tag(&LocaleTag::parse(tag))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}

// TODO: read text direction from CLDR likely-subtags data instead of this fixed set.
pub fn is_rtl_language(locale: &Locale) -> bool {
    RTL_LANGUAGES.contains(locale.language())
}
