//! Built-in profile configurations, compiled into the binary.

use super::{ProfileConfig, ProfileError};
use tracing::trace;

const ENGLISH: &str = include_str!("../../configs/profiles/en.toml");
const FRENCH: &str = include_str!("../../configs/profiles/fr.toml");
const GERMAN: &str = include_str!("../../configs/profiles/de.toml");
const ARMENIAN: &str = include_str!("../../configs/profiles/hy.toml");
const THAI: &str = include_str!("../../configs/profiles/th.toml");

/// Languages with a dedicated preset.
pub const LANGUAGES: [&str; 5] = ["en", "fr", "de", "hy", "th"];

/// The preset for `language`, if there is one.
pub fn named(language: &str) -> Result<ProfileConfig, ProfileError> {
    let source = match language {
        "en" => ENGLISH,
        "fr" => FRENCH,
        "de" => GERMAN,
        "hy" => ARMENIAN,
        "th" => THAI,
        other => return Err(ProfileError::UnknownPreset(other.to_string())),
    };
    ProfileConfig::from_toml_str(source)
}

/// Default rules used when nothing more specific is known.
pub fn default_config() -> Result<ProfileConfig, ProfileError> {
    named("en")
}

/// Preset for `language`, or the default rules relabelled with `language`.
pub fn for_language(language: &str) -> Result<ProfileConfig, ProfileError> {
    match named(language) {
        Err(ProfileError::UnknownPreset(_)) => {
            trace!(language, "no preset, using default rules");
            let mut config = default_config()?;
            config.language = language.to_string();
            Ok(config)
        }
        found => found,
    }
}
