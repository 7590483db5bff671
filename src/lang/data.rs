use crate::lang::{CaseMap, Lang, LangEntry};
use crate::script::ScriptId;

use paste::paste;
use phf::{Map, Set, phf_map, phf_set};

/// ---------------------------------------------------------------------------
///    Macro – generates the casing table from a single definition list
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $name:literal,
        upper: [ $($ufrom:expr => $uto:expr),* $(,)? ],
        lower: [ $($lfrom:expr => $lto:expr),* $(,)? ],
        title_case_root: $root:expr,
        uppercase: $uppercase:expr
    ),* $(,)?) => {
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub static UPPER: &[CaseMap] = &[
                        $(CaseMap { from: $ufrom, to: $uto }),*
                    ];

                    pub static LOWER: &[CaseMap] = &[
                        $(CaseMap { from: $lfrom, to: $lto }),*
                    ];

                    pub const TITLE_CASE_ROOT: bool = $root;
                    pub const SUPPORTS_UPPERCASE: bool = $uppercase;
                }
            }
        )*

        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        upper_map: [<$code:lower _data>]::UPPER,
                        lower_map: [<$code:lower _data>]::LOWER,
                        title_case_root: [<$code:lower _data>]::TITLE_CASE_ROOT,
                        supports_uppercase: [<$code:lower _data>]::SUPPORTS_UPPERCASE,
                    }
                ),*
            };
        }

        pub fn from_code(code: &str) -> Option<Lang> {
            match code {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Languages whose casing differs from the root rules
// ---------------------------------------------------------------------------
define_languages! {
    TUR, "tr", "Turkish",
        upper: [ 'i' => 'İ' ],
        lower: [ 'I' => 'ı', 'İ' => 'i' ],
        title_case_root: false,
        uppercase: true,

    AZE, "az", "Azerbaijani",
        upper: [ 'i' => 'İ' ],
        lower: [ 'I' => 'ı', 'İ' => 'i' ],
        title_case_root: false,
        uppercase: true,

    // Greek uppercase drops tonos; dialytika survives on ΐ/ΰ.
    ELL, "el", "Greek",
        upper: [
            'ά' => 'Α', 'έ' => 'Ε', 'ή' => 'Η', 'ί' => 'Ι', 'ό' => 'Ο', 'ύ' => 'Υ', 'ώ' => 'Ω',
            'Ά' => 'Α', 'Έ' => 'Ε', 'Ή' => 'Η', 'Ί' => 'Ι', 'Ό' => 'Ο', 'Ύ' => 'Υ', 'Ώ' => 'Ω',
            'ΐ' => 'Ϊ', 'ΰ' => 'Ϋ',
        ],
        lower: [],
        title_case_root: true,
        uppercase: true,

    KAT, "ka", "Georgian",
        upper: [],
        lower: [],
        title_case_root: false,
        uppercase: false,
}

// ---------------------------------------------------------------------------
//    Spell-checker script per language. Anything absent is Latin.
// ---------------------------------------------------------------------------
pub static SCRIPT_BY_LANGUAGE: Map<&'static str, ScriptId> = phf_map! {
    "ar" => ScriptId::Arabic,
    "hy" => ScriptId::Armenian,
    "bg" => ScriptId::Bulgarian,
    "bn" => ScriptId::Bengali,
    "sr" => ScriptId::Cyrillic,
    "ru" => ScriptId::Cyrillic,
    "ka" => ScriptId::Georgian,
    "el" => ScriptId::Greek,
    "iw" => ScriptId::Hebrew,
    "km" => ScriptId::Khmer,
    "lo" => ScriptId::Lao,
    "ml" => ScriptId::Malayalam,
    "my" => ScriptId::Myanmar,
    "si" => ScriptId::Sinhala,
    "ta" => ScriptId::Tamil,
    "te" => ScriptId::Telugu,
    "th" => ScriptId::Thai,
    "uk" => ScriptId::Cyrillic,
};

// ---------------------------------------------------------------------------
//    Right-to-left languages (legacy `iw` code for Hebrew)
// ---------------------------------------------------------------------------
pub static RTL_LANGUAGES: Set<&'static str> = phf_set! {
    "ar", // Arabic
    "fa", // Persian
    "iw", // Hebrew
    "ku", // Kurdish
    "ps", // Pashto
    "sd", // Sindhi
    "ug", // Uyghur
    "ur", // Urdu
    "yi", // Yiddish
};
