//! Per-locale spacing and punctuation rules.
//!
//! A [`SpacingAndPunctuationProfile`] is built once from a [`ProfileConfig`]
//! (loaded from TOML or taken from a [`preset`]) and never changes afterwards.

pub mod preset;

use crate::codepoint::CodePointSet;
use crate::locale::Locale;
use crate::unicode::{CODE_SPACE, is_letter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to parse profile config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read profile config `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("profile field `{field}` holds {value:#x}, which is not a Unicode scalar value")]
    InvalidCodePoint { field: &'static str, value: u32 },

    #[error("no built-in profile for language `{0}`")]
    UnknownPreset(String),
}

/// Raw resource values for one locale, as the resource layer supplies them.
///
/// Every `symbols_*` string contributes each of its code points to a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub language: String,
    #[serde(default)]
    pub symbols_preceded_by_space: String,
    #[serde(default)]
    pub symbols_followed_by_space: String,
    #[serde(default)]
    pub symbols_clustering_together: String,
    #[serde(default)]
    pub symbols_word_connectors: String,
    #[serde(default)]
    pub symbols_word_separators: String,
    #[serde(default)]
    pub symbols_sentence_terminators: String,
    pub sentence_separator: u32,
    pub abbreviation_marker: u32,
    #[serde(default = "default_true")]
    pub current_language_has_spaces: bool,
    #[serde(default)]
    pub suggested_punctuations: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl ProfileConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingAndPunctuationProfile {
    preceded_by_space: CodePointSet,
    followed_by_space: CodePointSet,
    clustering_symbols: CodePointSet,
    word_connectors: CodePointSet,
    word_separators: CodePointSet,
    sentence_terminators: CodePointSet,
    sentence_separator: char,
    abbreviation_marker: char,
    sentence_separator_and_space: String,
    has_spaces: bool,
    uses_american_typography: bool,
    uses_german_rules: bool,
    suggested_punctuations: Vec<String>,
}

fn scalar(field: &'static str, value: u32) -> Result<char, ProfileError> {
    char::from_u32(value).ok_or(ProfileError::InvalidCodePoint { field, value })
}

impl SpacingAndPunctuationProfile {
    pub fn from_config(config: &ProfileConfig) -> Result<Self, ProfileError> {
        let sentence_separator = scalar("sentence_separator", config.sentence_separator)?;
        let abbreviation_marker = scalar("abbreviation_marker", config.abbreviation_marker)?;
        let sentence_terminators = CodePointSet::from_chars(&config.symbols_sentence_terminators);
        if !sentence_terminators.contains(sentence_separator) {
            warn!(
                language = %config.language,
                separator = %sentence_separator,
                "sentence separator is not a sentence terminator"
            );
        }

        let language = config.language.to_ascii_lowercase();
        // American typography is the most common for every English variant.
        let uses_american_typography = language == "en";
        let uses_german_rules = language == "de";

        let mut sentence_separator_and_space = String::with_capacity(2);
        sentence_separator_and_space.push(sentence_separator);
        sentence_separator_and_space.push(CODE_SPACE);

        let profile = Self {
            preceded_by_space: CodePointSet::from_chars(&config.symbols_preceded_by_space),
            followed_by_space: CodePointSet::from_chars(&config.symbols_followed_by_space),
            clustering_symbols: CodePointSet::from_chars(&config.symbols_clustering_together),
            word_connectors: CodePointSet::from_chars(&config.symbols_word_connectors),
            word_separators: CodePointSet::from_chars(&config.symbols_word_separators),
            sentence_terminators,
            sentence_separator,
            abbreviation_marker,
            sentence_separator_and_space,
            has_spaces: config.current_language_has_spaces,
            uses_american_typography,
            uses_german_rules,
            suggested_punctuations: config.suggested_punctuations.clone(),
        };
        debug!(language = %config.language, "built spacing and punctuation profile");
        Ok(profile)
    }

    /// Profile from the built-in preset for `locale`'s language, falling back
    /// to the default preset with the locale's language flags.
    pub fn for_locale(locale: &Locale) -> Result<Self, ProfileError> {
        Self::from_config(&preset::for_language(locale.language())?)
    }

    /// Same profile with a different set of word separators.
    pub fn with_word_separators(&self, word_separators: CodePointSet) -> Self {
        Self {
            word_separators,
            ..self.clone()
        }
    }

    #[inline]
    pub fn is_word_separator(&self, c: char) -> bool {
        self.word_separators.contains(c)
    }

    #[inline]
    pub fn is_word_connector(&self, c: char) -> bool {
        self.word_connectors.contains(c)
    }

    #[inline]
    pub fn is_word_code_point(&self, c: char) -> bool {
        is_letter(c) || self.is_word_connector(c)
    }

    #[inline]
    pub fn is_usually_preceded_by_space(&self, c: char) -> bool {
        self.preceded_by_space.contains(c)
    }

    #[inline]
    pub fn is_usually_followed_by_space(&self, c: char) -> bool {
        self.followed_by_space.contains(c)
    }

    #[inline]
    pub fn is_clustering_symbol(&self, c: char) -> bool {
        self.clustering_symbols.contains(c)
    }

    #[inline]
    pub fn is_sentence_terminator(&self, c: char) -> bool {
        self.sentence_terminators.contains(c)
    }

    #[inline]
    pub fn is_abbreviation_marker(&self, c: char) -> bool {
        c == self.abbreviation_marker
    }

    #[inline]
    pub fn is_sentence_separator(&self, c: char) -> bool {
        c == self.sentence_separator
    }

    pub fn word_separators(&self) -> &CodePointSet {
        &self.word_separators
    }

    pub fn sentence_separator(&self) -> char {
        self.sentence_separator
    }

    pub fn abbreviation_marker(&self) -> char {
        self.abbreviation_marker
    }

    pub fn sentence_separator_and_space(&self) -> &str {
        &self.sentence_separator_and_space
    }

    pub fn has_spaces(&self) -> bool {
        self.has_spaces
    }

    pub fn uses_american_typography(&self) -> bool {
        self.uses_american_typography
    }

    pub fn uses_german_rules(&self) -> bool {
        self.uses_german_rules
    }

    pub fn suggested_punctuations(&self) -> &[String] {
        &self.suggested_punctuations
    }
}

impl fmt::Display for SpacingAndPunctuationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "preceded_by_space = {:?}", self.preceded_by_space.as_slice())?;
        writeln!(f, "followed_by_space = {:?}", self.followed_by_space.as_slice())?;
        writeln!(f, "clustering_symbols = {:?}", self.clustering_symbols.as_slice())?;
        writeln!(f, "word_connectors = {:?}", self.word_connectors.as_slice())?;
        writeln!(f, "word_separators = {:?}", self.word_separators.as_slice())?;
        writeln!(f, "sentence_terminators = {:?}", self.sentence_terminators.as_slice())?;
        writeln!(f, "suggested_punctuations = {:?}", self.suggested_punctuations)?;
        writeln!(f, "sentence_separator = {}", self.sentence_separator as u32)?;
        writeln!(f, "abbreviation_marker = {}", self.abbreviation_marker as u32)?;
        writeln!(f, "sentence_separator_and_space = {:?}", self.sentence_separator_and_space)?;
        writeln!(f, "has_spaces = {}", self.has_spaces)?;
        writeln!(f, "uses_american_typography = {}", self.uses_american_typography)?;
        write!(f, "uses_german_rules = {}", self.uses_german_rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> SpacingAndPunctuationProfile {
        SpacingAndPunctuationProfile::for_locale(&Locale::from("en_US")).unwrap()
    }

    #[test]
    fn english_queries() {
        let p = english();
        assert!(p.is_word_separator(' '));
        assert!(p.is_word_separator('"'));
        assert!(!p.is_word_separator('\''));
        assert!(p.is_word_connector('\''));
        assert!(p.is_word_code_point('x'));
        assert!(p.is_word_code_point('-'));
        assert!(!p.is_word_code_point('1'));
        assert!(!p.is_word_code_point('\u{24D0}'));
        assert!(!p.is_word_code_point('\u{093E}'));
        assert!(p.is_usually_preceded_by_space('('));
        assert!(p.is_usually_followed_by_space(','));
        assert!(!p.is_clustering_symbol('!'));
        assert!(p.is_sentence_terminator('?'));
        assert!(p.is_sentence_separator('.'));
        assert!(p.is_abbreviation_marker('.'));
        assert_eq!(p.sentence_separator_and_space(), ". ");
        assert!(p.has_spaces());
        assert!(p.uses_american_typography());
        assert!(!p.uses_german_rules());
    }

    #[test]
    fn language_flags_follow_the_locale() {
        let de = SpacingAndPunctuationProfile::for_locale(&Locale::from("de_AT")).unwrap();
        assert!(de.uses_german_rules());
        assert!(!de.uses_american_typography());

        let it = SpacingAndPunctuationProfile::for_locale(&Locale::from("it")).unwrap();
        assert!(!it.uses_german_rules());
        assert!(!it.uses_american_typography());
        assert!(it.is_word_separator(','));
    }

    #[test]
    fn french_spacing() {
        let fr = SpacingAndPunctuationProfile::for_locale(&Locale::from("fr_CA")).unwrap();
        assert!(fr.is_usually_preceded_by_space('!'));
        assert!(fr.is_clustering_symbol('?'));
    }

    #[test]
    fn override_word_separators() {
        let p = english();
        let q = p.with_word_separators(CodePointSet::from_chars(" "));
        assert!(!q.is_word_separator(','));
        assert!(q.is_word_separator(' '));
        assert!(q.is_usually_followed_by_space(','));
        assert!(p.is_word_separator(','));
    }

    #[test]
    fn invalid_scalar_is_rejected() {
        let mut config = preset::for_language("en").unwrap();
        config.sentence_separator = 0xD800;
        let err = SpacingAndPunctuationProfile::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidCodePoint {
                field: "sentence_separator",
                value: 0xD800
            }
        ));
    }

    #[test]
    fn loads_minimal_toml() {
        let config = ProfileConfig::from_toml_str(
            r#"
            language = "xx"
            symbols_word_separators = " ,"
            sentence_separator = 0x3002
            abbreviation_marker = 46
            "#,
        )
        .unwrap();
        assert!(config.current_language_has_spaces);
        let p = SpacingAndPunctuationProfile::from_config(&config).unwrap();
        assert!(p.is_sentence_separator('。'));
        assert!(p.is_word_separator(','));
        assert!(!p.is_sentence_terminator('.'));
        assert!(p.suggested_punctuations().is_empty());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ProfileConfig::from_toml_str("language = ").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ProfileConfig::from_path("/nonexistent/profile.toml").unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/profile.toml"));
    }

    #[test]
    fn dump_lists_every_field() {
        let dump = english().to_string();
        for field in [
            "preceded_by_space",
            "word_separators",
            "sentence_separator = 46",
            "sentence_separator_and_space = \". \"",
            "uses_german_rules = false",
        ] {
            assert!(dump.contains(field), "{field} missing from\n{dump}");
        }
    }
}
