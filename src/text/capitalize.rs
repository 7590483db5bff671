//! Capitalization detection and transformation.
//!
//! Known gaps, kept for compatibility with stored user data:
//! - Serbian `lj`/`nj` digraphs title-case as `LJ`, not `Lj`.
//! - Dutch `ij` written as two code points is not raised as a unit.
//!   The `Ĳ` ligature works.

use crate::codepoint::CodePointSet;
use crate::lang::{LocaleCasing, casing_for, title_casing_for};
use crate::locale::Locale;
use crate::unicode::{is_letter, is_lower, is_upper};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CapitalizationType {
    /// No capitals, or mixed case.
    None = 0,
    /// First letter only.
    First = 1,
    /// Every letter.
    All = 2,
}

/// Classifies the capitalization of a word.
///
/// Leading non-letters are skipped. Non-letters inside the word ("IT'S",
/// "FULL-TIME") do not count either way.
pub fn get_capitalization_type(text: &str) -> CapitalizationType {
    let mut chars = text.chars();
    let Some(first) = chars.by_ref().find(|&c| is_letter(c)) else {
        return CapitalizationType::None;
    };
    if !is_upper(first) {
        return CapitalizationType::None;
    }

    let mut caps_count = 1usize;
    let mut letter_count = 1usize;
    for c in chars {
        // Once the word is known to be mixed case nothing can change the result.
        if caps_count != 1 && letter_count != caps_count {
            break;
        }
        if is_upper(c) {
            caps_count += 1;
            letter_count += 1;
        } else if is_letter(c) {
            letter_count += 1;
        }
    }

    if caps_count == 1 {
        CapitalizationType::First
    } else if letter_count == caps_count {
        CapitalizationType::All
    } else {
        CapitalizationType::None
    }
}

#[inline]
fn split_first(text: &str) -> Option<(char, &str)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    Some((first, chars.as_str()))
}

/// Uppercases the first code point and leaves the rest untouched.
pub fn capitalize_first_code_point(text: &str, locale: &Locale) -> String {
    let Some((first, rest)) = split_first(text) else {
        return String::new();
    };
    let mut out = String::with_capacity(text.len() + 2);
    title_casing_for(locale).push_upper(first, &mut out);
    out.push_str(rest);
    out
}

/// Uppercases the first code point and lowercases the rest in `locale`.
pub fn capitalize_first_and_downcase_rest(text: &str, locale: &Locale) -> String {
    let Some((first, rest)) = split_first(text) else {
        return String::new();
    };
    let mut out = String::with_capacity(text.len() + 2);
    title_casing_for(locale).push_upper(first, &mut out);
    out.push_str(&casing_for(locale).to_lower(rest));
    out
}

/// Uppercases the first code point after every separator (and at the start),
/// lowercases everything else.
pub fn capitalize_each_word(text: &str, separators: &CodePointSet, locale: &Locale) -> String {
    let casing = casing_for(locale);
    let mut out = String::with_capacity(text.len());
    let mut needs_caps_next = true;
    for c in text.chars() {
        if needs_caps_next {
            casing.push_upper(c, &mut out);
        } else {
            casing.push_lower(c, &mut out);
        }
        needs_caps_next = separators.contains(c);
    }
    out
}

/// Whether [`capitalize_each_word`] would leave the letters of `text` as they are.
/// Stops at the first letter in the wrong case; allocates nothing.
pub fn is_identical_after_capitalize_each_word(text: &str, separators: &CodePointSet) -> bool {
    let mut needs_caps_next = true;
    for c in text.chars() {
        if is_letter(c) && ((needs_caps_next && !is_upper(c)) || (!needs_caps_next && !is_lower(c)))
        {
            return false;
        }
        needs_caps_next = separators.contains(c);
    }
    true
}

pub fn is_identical_after_upcase(text: &str) -> bool {
    text.chars().all(|c| !is_letter(c) || is_upper(c))
}

pub fn is_identical_after_downcase(text: &str) -> bool {
    text.chars().all(|c| !is_letter(c) || is_lower(c))
}
