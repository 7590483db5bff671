//! String utilities for the input engine: capitalization, context heuristics
//! and the small list helpers the settings layer keeps in single strings.

pub mod capitalize;
pub mod heuristics;

pub use capitalize::{
    CapitalizationType, capitalize_each_word, capitalize_first_and_downcase_rest,
    capitalize_first_code_point, get_capitalization_type, is_identical_after_capitalize_each_word,
    is_identical_after_downcase, is_identical_after_upcase,
};
pub use heuristics::{
    get_trailing_single_quotes_count, has_line_break_character, is_empty_or_whitespace,
    is_inside_double_quote_or_after_digit, last_part_looks_like_url,
};

use crate::codepoint::code_point_count;
use crate::lang::{LocaleCasing, title_casing_for};
use crate::locale::Locale;
use crate::script::script_supports_uppercase;
use crate::unicode::CODE_SPACE;

// Like CSV without quoting: values can never contain a comma.
const COMMA_SPLITTABLE_SEPARATOR: char = ',';

pub fn contains_in_comma_splittable_text(text: &str, values: &str) -> bool {
    if values.is_empty() {
        return false;
    }
    values.split(COMMA_SPLITTABLE_SEPARATOR).any(|v| v == text)
}

/// `values` without any element equal to `text`.
pub fn remove_from_comma_splittable_text(text: &str, values: &str) -> String {
    if values.is_empty() {
        return String::new();
    }
    if !contains_in_comma_splittable_text(text, values) {
        return values.to_string();
    }
    values
        .split(COMMA_SPLITTABLE_SEPARATOR)
        .filter(|v| *v != text)
        .collect::<Vec<_>>()
        .join(",")
}

/// Drops repeated suggestions, keeping the first occurrence of each in place.
pub fn remove_dupes(suggestions: &mut Vec<String>) {
    if suggestions.len() < 2 {
        return;
    }
    let mut i = 1;
    while i < suggestions.len() {
        if suggestions[..i].contains(&suggestions[i]) {
            suggestions.remove(i);
        } else {
            i += 1;
        }
    }
}

/// Key label as shown with shift on. Caseless scripts are left alone.
pub fn title_case_key_label(label: &str, locale: &Locale) -> String {
    if !script_supports_uppercase(locale.language()) {
        return label.to_string();
    }
    title_casing_for(locale).to_upper(label)
}

/// Shifted form of a single key code.
///
/// Control codes below space come back unchanged. `None` when the shifted
/// form is longer than one code point.
pub fn title_case_key_code(code: char, locale: &Locale) -> Option<char> {
    if code < CODE_SPACE {
        return Some(code);
    }
    let mut buf = [0u8; 4];
    let label = title_case_key_label(code.encode_utf8(&mut buf), locale);
    if code_point_count(&label) != 1 {
        return None;
    }
    label.chars().next()
}
