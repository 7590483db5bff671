pub(crate) mod behaviour;
pub mod data;

pub use behaviour::LocaleCasing;
pub use data::{AZE, ELL, KAT, TUR};

use crate::locale::Locale;
use data::LANG_TABLE;

/// A language that carries its own casing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn entry(&self) -> &'static LangEntry {
        entry_for(self.code)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CaseMap {
    pub from: char,
    pub to: char,
}

/// Casing behaviour of one language.
#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    /// 1:1 uppercase mappings that override the root mapping.
    pub upper_map: &'static [CaseMap],
    /// 1:1 lowercase mappings that override the root mapping.
    pub lower_map: &'static [CaseMap],
    /// Title-casing (first letter of a word, key labels) must use root casing.
    pub title_case_root: bool,
    /// `false` for scripts with no case distinction worth applying on key labels.
    pub supports_uppercase: bool,
}

/// Locale-independent casing, used for every language without an entry.
pub static ROOT_ENTRY: LangEntry = LangEntry {
    upper_map: &[],
    lower_map: &[],
    title_case_root: false,
    supports_uppercase: true,
};

#[inline]
pub fn entry_for(language: &str) -> &'static LangEntry {
    LANG_TABLE.get(language).unwrap_or(&ROOT_ENTRY)
}

/// Casing rules for general upper/lower casing in `locale`.
#[inline]
pub fn casing_for(locale: &Locale) -> &'static LangEntry {
    entry_for(locale.language())
}

/// Casing rules for title-casing in `locale`.
///
/// Greek uppercasing drops tonos and dialytika, which loses information when
/// only the first letter is raised, so Greek title-cases with root rules.
#[inline]
pub fn title_casing_for(locale: &Locale) -> &'static LangEntry {
    let entry = casing_for(locale);
    if entry.title_case_root {
        &ROOT_ENTRY
    } else {
        entry
    }
}
