//! Writing systems known to the spell checker.

use crate::lang::{data::SCRIPT_BY_LANGUAGE, entry_for};
use crate::locale::Locale;
use crate::unicode::is_letter;

/// Closed set of scripts. `Unknown` is used for hardware keyboards, where the
/// script of the input cannot be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ScriptId {
    Unknown = -1,
    Arabic = 0,
    Armenian = 1,
    Bengali = 2,
    Cyrillic = 3,
    Devanagari = 4,
    Georgian = 5,
    Greek = 6,
    Hebrew = 7,
    Kannada = 8,
    Khmer = 9,
    Lao = 10,
    Latin = 11,
    Malayalam = 12,
    Myanmar = 13,
    Sinhala = 14,
    Tamil = 15,
    Telugu = 16,
    Thai = 17,
    Bulgarian = 18,
}

impl ScriptId {
    pub const ALL: [ScriptId; 20] = [
        ScriptId::Unknown,
        ScriptId::Arabic,
        ScriptId::Armenian,
        ScriptId::Bengali,
        ScriptId::Cyrillic,
        ScriptId::Devanagari,
        ScriptId::Georgian,
        ScriptId::Greek,
        ScriptId::Hebrew,
        ScriptId::Kannada,
        ScriptId::Khmer,
        ScriptId::Lao,
        ScriptId::Latin,
        ScriptId::Malayalam,
        ScriptId::Myanmar,
        ScriptId::Sinhala,
        ScriptId::Tamil,
        ScriptId::Telugu,
        ScriptId::Thai,
        ScriptId::Bulgarian,
    ];

    #[inline(always)]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Id from its stable numeric value.
    ///
    /// # Panics
    /// On a value outside the enumeration. Callers only ever hold valid ids,
    /// so anything else is a programming error.
    pub fn from_raw(value: i32) -> ScriptId {
        match ScriptId::try_from(value) {
            Ok(script) => script,
            Err(value) => panic!("impossible value of script: {value}"),
        }
    }
}

impl TryFrom<i32> for ScriptId {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        ScriptId::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .ok_or(value)
    }
}

/// Script of the spell checker for `locale`; Latin unless the language is listed.
pub fn script_from_spell_checker_locale(locale: &Locale) -> ScriptId {
    SCRIPT_BY_LANGUAGE
        .get(locale.language())
        .copied()
        .unwrap_or(ScriptId::Latin)
}

pub fn script_supports_uppercase(language: &str) -> bool {
    entry_for(language).supports_uppercase
}

/// Whether `c` is a letter that belongs to `script` for spell-checking.
///
/// Mostly block-range tests. Cyrillic, Bulgarian and Latin additionally
/// require a letter. `Unknown` accepts everything.
pub fn is_letter_part_of_script(c: char, script: ScriptId) -> bool {
    let cp = c as u32;
    match script {
        ScriptId::Arabic => matches!(cp,
            0x0600..=0x06FF | // Arabic
            0x0750..=0x07BF | // Arabic Supplement, Thaana
            0x08A0..=0x08FF | // Arabic Extended-A
            0xFB50..=0xFDFF | // Presentation Forms-A
            0xFE70..=0xFEFF   // Presentation Forms-B
        ),
        // Armenian part of Alphabetic Presentation Forms only
        ScriptId::Armenian => matches!(cp, 0x0530..=0x058F | 0xFB13..=0xFB17),
        ScriptId::Bengali => matches!(cp, 0x0980..=0x09FF),
        // Archaic Cyrillic outside this block is not in any dictionary.
        ScriptId::Bulgarian | ScriptId::Cyrillic => {
            matches!(cp, 0x0400..=0x052F) && is_letter(c)
        }
        ScriptId::Devanagari => matches!(cp, 0x0900..=0x097F),
        ScriptId::Georgian => matches!(cp, 0x10A0..=0x10FF | 0x2D00..=0x2D2F),
        // 0xF2 (ò) shows up in a few Greek dictionary words.
        ScriptId::Greek => matches!(cp, 0x0370..=0x03FF | 0x1F00..=0x1FFF | 0xF2),
        ScriptId::Hebrew => matches!(cp, 0x0590..=0x05FF | 0xFB1D..=0xFB4F),
        ScriptId::Kannada => matches!(cp, 0x0C80..=0x0CFF),
        ScriptId::Khmer => matches!(cp, 0x1780..=0x17FF | 0x19E0..=0x19FF),
        ScriptId::Lao => matches!(cp, 0x0E80..=0x0EFF),
        // C0, C1, Latin Extended-A/B and IPA extensions are contiguous up to 0x2AF.
        ScriptId::Latin => cp <= 0x02AF && is_letter(c),
        ScriptId::Malayalam => matches!(cp, 0x0D00..=0x0D7F),
        ScriptId::Myanmar => matches!(cp,
            0x1000..=0x109F | // Myanmar
            0xAA60..=0xAA7F | // Extended-A
            0xA9E0..=0xA9FF   // Extended-B
        ),
        ScriptId::Sinhala => matches!(cp, 0x0D80..=0x0DFF),
        ScriptId::Tamil => matches!(cp, 0x0B80..=0x0BFF),
        ScriptId::Telugu => matches!(cp, 0x0C00..=0x0C7F),
        ScriptId::Thai => matches!(cp, 0x0E00..=0x0E7F),
        ScriptId::Unknown => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_map_to_scripts() {
        let cases = [
            ("ru_RU", ScriptId::Cyrillic),
            ("uk", ScriptId::Cyrillic),
            ("bg", ScriptId::Bulgarian),
            ("he", ScriptId::Hebrew),
            ("el", ScriptId::Greek),
            ("th", ScriptId::Thai),
            ("en_US", ScriptId::Latin),
            ("fa", ScriptId::Latin),
            ("", ScriptId::Latin),
        ];
        for (tag, script) in cases {
            assert_eq!(script_from_spell_checker_locale(&Locale::from(tag)), script, "{tag}");
        }
    }

    #[test]
    fn latin_requires_a_letter() {
        assert!(is_letter_part_of_script('a', ScriptId::Latin));
        assert!(is_letter_part_of_script('ß', ScriptId::Latin));
        assert!(!is_letter_part_of_script('1', ScriptId::Latin));
        assert!(!is_letter_part_of_script('Ѐ', ScriptId::Latin));
    }

    #[test]
    fn cyrillic_requires_a_letter_but_thai_does_not() {
        assert!(is_letter_part_of_script('ж', ScriptId::Cyrillic));
        assert!(is_letter_part_of_script('ж', ScriptId::Bulgarian));
        // U+0483 COMBINING CYRILLIC TITLO is in the block but is not a letter
        assert!(!is_letter_part_of_script('\u{0483}', ScriptId::Cyrillic));
        // U+0E3F THAI CURRENCY SYMBOL BAHT is accepted on range alone
        assert!(is_letter_part_of_script('\u{0E3F}', ScriptId::Thai));
    }

    #[test]
    fn greek_accepts_o_grave() {
        assert!(is_letter_part_of_script('ò', ScriptId::Greek));
        assert!(is_letter_part_of_script('ἀ', ScriptId::Greek));
        assert!(!is_letter_part_of_script('o', ScriptId::Greek));
    }

    #[test]
    fn unknown_accepts_everything() {
        for c in ['a', '1', ' ', '😀', '\u{0}', '中'] {
            assert!(is_letter_part_of_script(c, ScriptId::Unknown));
        }
    }

    #[test]
    fn raw_values_round_trip() {
        for script in ScriptId::ALL {
            assert_eq!(ScriptId::from_raw(script.value()), script);
        }
        assert_eq!(ScriptId::try_from(19), Err(19));
    }

    #[test]
    #[should_panic(expected = "impossible value of script")]
    fn raw_value_out_of_range_is_fatal() {
        ScriptId::from_raw(42);
    }

    #[test]
    fn georgian_has_no_uppercase() {
        assert!(!script_supports_uppercase("ka"));
        assert!(script_supports_uppercase("en"));
        assert!(script_supports_uppercase("el"));
    }
}
