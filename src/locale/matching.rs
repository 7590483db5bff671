//! Graded locale matching.
//!
//! The tested locale has to satisfy every part the reference locale specifies.
//! Identical locales are a full match; a tested locale that agrees with the
//! reference but is more specific is a partial match; a tested locale that
//! disagrees on a part the reference requires is a "differ" level.
//!
//! ```text
//! en          <=> en_US          LanguageMatch
//! en_US       <=> en             LanguageMatchCountryDiffer
//! en_US_POSIX <=> en_US_Android  LanguageAndCountryMatchVariantDiffer
//! en_US       <=> en_US_Android  LanguageAndCountryMatch
//! es_US       <=> en_US          NoMatch
//! ""          <=> en_US          AnyMatch
//! ```

use crate::locale::LocaleTag;
use std::fmt;

/// How well a tested locale satisfies a reference locale.
///
/// Discriminants are stable and ordered: a better match always has a
/// strictly greater value. They may be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum MatchLevel {
    NoMatch = 0,
    /// Same language; the reference requires a country the tested locale
    /// lacks or has differently.
    LanguageMatchCountryDiffer = 3,
    /// Same language and country; the reference requires a variant the
    /// tested locale lacks or has differently.
    LanguageAndCountryMatchVariantDiffer = 6,
    /// The reference is empty and accepts any non-empty tested locale.
    AnyMatch = 10,
    /// Same language; the tested locale adds a country.
    LanguageMatch = 15,
    /// Same language and country; the tested locale adds a variant.
    LanguageAndCountryMatch = 20,
    FullMatch = 30,
}

pub const MATCH_LEVEL_MAX: u8 = MatchLevel::FullMatch as u8;

/// Threshold at which a level counts as a match in the usual sense.
const MATCH_THRESHOLD: MatchLevel = MatchLevel::AnyMatch;

impl MatchLevel {
    pub const ALL: [MatchLevel; 7] = [
        MatchLevel::NoMatch,
        MatchLevel::LanguageMatchCountryDiffer,
        MatchLevel::LanguageAndCountryMatchVariantDiffer,
        MatchLevel::AnyMatch,
        MatchLevel::LanguageMatch,
        MatchLevel::LanguageAndCountryMatch,
        MatchLevel::FullMatch,
    ];

    #[inline(always)]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub fn is_match(self) -> bool {
        self >= MATCH_THRESHOLD
    }

    /// See [`match_level_sorted_string`].
    #[inline]
    pub fn sorted_string(self) -> String {
        match_level_sorted_string(self.value())
    }
}

impl TryFrom<u8> for MatchLevel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MatchLevel::ALL
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or(value)
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchLevel::NoMatch => "no_match",
            MatchLevel::LanguageMatchCountryDiffer => "language_match_country_differ",
            MatchLevel::LanguageAndCountryMatchVariantDiffer => {
                "language_and_country_match_variant_differ"
            }
            MatchLevel::AnyMatch => "any_match",
            MatchLevel::LanguageMatch => "language_match",
            MatchLevel::LanguageAndCountryMatch => "language_and_country_match",
            MatchLevel::FullMatch => "full_match",
        };
        f.write_str(name)
    }
}

/// Match level of `tested` against `reference`; `None` stands for an absent locale.
///
/// Total over all inputs. Malformed tags just compare as partial tags.
pub fn get_match_level(reference: Option<&str>, tested: Option<&str>) -> MatchLevel {
    let reference = match reference {
        Some(r) if !r.is_empty() => r,
        _ => {
            return if tested.is_none_or(str::is_empty) {
                MatchLevel::FullMatch
            } else {
                MatchLevel::AnyMatch
            };
        }
    };
    let Some(tested) = tested else {
        return MatchLevel::NoMatch;
    };

    let reference = LocaleTag::parse(reference);
    let tested = LocaleTag::parse(tested);

    if reference.language != tested.language {
        return MatchLevel::NoMatch;
    }

    match (reference.country, reference.variant) {
        (None, _) => {
            if tested.part_count() == 1 {
                MatchLevel::FullMatch
            } else {
                MatchLevel::LanguageMatch
            }
        }
        (Some(country), None) => match tested.country {
            Some(c) if c == country => {
                if tested.variant.is_some() {
                    MatchLevel::LanguageAndCountryMatch
                } else {
                    MatchLevel::FullMatch
                }
            }
            _ => MatchLevel::LanguageMatchCountryDiffer,
        },
        (Some(country), Some(variant)) => match (tested.country, tested.variant) {
            (Some(c), _) if c != country => MatchLevel::LanguageMatchCountryDiffer,
            (None, _) => MatchLevel::LanguageMatchCountryDiffer,
            (Some(_), Some(v)) if v == variant => MatchLevel::FullMatch,
            (Some(_), _) => MatchLevel::LanguageAndCountryMatchVariantDiffer,
        },
    }
}

/// [`get_match_level`] for two present locale strings.
#[inline]
pub fn match_level(reference: &str, tested: &str) -> MatchLevel {
    get_match_level(Some(reference), Some(tested))
}

#[inline(always)]
pub fn is_match(level: MatchLevel) -> bool {
    level.is_match()
}

/// Two-digit, zero-padded `30 - level`.
///
/// Ascending lexicographic order of these strings is best match first. The
/// caller must pass a level in `0..=30`; the width is fixed at two digits.
pub fn match_level_sorted_string(level: u8) -> String {
    debug_assert!(level <= MATCH_LEVEL_MAX, "match level {level} out of range");
    format!("{:02}", MATCH_LEVEL_MAX.saturating_sub(level))
}
