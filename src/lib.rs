//! Locale matching and code-point classification for input method engines.
//!
//! Everything here is a pure function over strings and code points, apart
//! from [`LocaleCache`], which is shared behind a lock.

pub mod codepoint;
pub mod hex;
pub mod lang;
pub mod locale;
pub mod profile;
pub mod script;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod text;
pub mod unicode;

pub use codepoint::CodePointSet;
pub use hex::{HexError, byte_array_to_hex_string, hex_string_to_byte_array};
pub use lang::{AZE, ELL, KAT, Lang, LocaleCasing, TUR};
pub use locale::{
    Locale, LocaleCache, LocaleTag, MatchLevel, get_match_level, is_match, is_rtl_language,
    match_level, match_level_sorted_string,
};
pub use profile::{ProfileConfig, ProfileError, SpacingAndPunctuationProfile};
pub use script::{ScriptId, is_letter_part_of_script, script_from_spell_checker_locale};
pub use text::CapitalizationType;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Hex(#[from] HexError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
