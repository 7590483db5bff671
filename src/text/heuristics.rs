//! Cheap backward scans over the text before the cursor.
//!
//! These run on every keystroke. None of them allocates.

use crate::unicode::{
    CODE_DOUBLE_QUOTE, CODE_PERIOD, CODE_SINGLE_QUOTE, CODE_SLASH, is_breaking_whitespace,
    is_digit, is_line_break,
};
use memchr::{memchr, memchr3};

/// Approximates whether the text before the cursor ends in something URL-like.
///
/// Walks back over the run of code points in `'.'..='z'` (ASCII letters,
/// digits, `/`, `:`, `?`, `=`, `@`, `_` and friends) and then says yes if the
/// run
/// - starts with `www` and contains a period, or
/// - starts with a single slash at the start of text or after whitespace, or
/// - contains both a period and a slash, or
/// - contains two consecutive slashes anywhere.
///
/// Loose on purpose: `abc./def` and `.abc/def` also pass.
pub fn last_part_looks_like_url(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let mut w_count = 0usize;
    let mut slash_count = 0usize;
    let mut has_slash = false;
    let mut has_period = false;
    // Code point that stopped the scan, if any.
    let mut stop = None;

    for c in text.chars().rev() {
        if !(CODE_PERIOD..='z').contains(&c) {
            stop = Some(c);
            break;
        }
        if c == CODE_PERIOD {
            has_period = true;
        }
        if c == CODE_SLASH {
            has_slash = true;
            slash_count += 1;
            if slash_count == 2 {
                return true;
            }
        } else {
            slash_count = 0;
        }
        if c == 'w' {
            w_count += 1;
        } else {
            w_count = 0;
        }
    }

    if w_count >= 3 && has_period {
        return true;
    }
    if slash_count == 1 && stop.is_none_or(is_breaking_whitespace) {
        return true;
    }
    has_period && has_slash
}

/// Whether the cursor sits inside a double-quoted run, or right after a digit.
///
/// Decides which side of an auto-inserted `"` gets the space. After a digit
/// the inch/minutes reading wins, so the answer is always yes there.
/// Otherwise the previous `"` decides: followed by whitespace it was closing,
/// preceded by whitespace it was opening.
pub fn is_inside_double_quote_or_after_digit(text: &str) -> bool {
    let mut chars = text.chars().rev().peekable();
    match chars.peek() {
        None => return false,
        Some(&last) if is_digit(last) => return true,
        Some(_) => {}
    }

    // The code point after the current one, in forward order.
    let mut next: Option<char> = None;
    let mut current = None;
    for c in chars {
        if c == CODE_DOUBLE_QUOTE && next.is_some_and(is_breaking_whitespace) {
            return false;
        }
        if is_breaking_whitespace(c) && next == Some(CODE_DOUBLE_QUOTE) {
            return true;
        }
        next = Some(c);
        current = Some(c);
    }
    // Start of text reached: only an opening quote at position 0 counts.
    current == Some(CODE_DOUBLE_QUOTE)
}

/// Number of consecutive `'` at the end of `text`.
pub fn get_trailing_single_quotes_count(text: &str) -> usize {
    let quote = CODE_SINGLE_QUOTE as u8;
    text.bytes().rev().take_while(|&b| b == quote).count()
}

/// Whether `text` contains LF, VT, FF, CR, NEL, LS or PS.
pub fn has_line_break_character(text: &str) -> bool {
    let bytes = text.as_bytes();
    if memchr3(b'\n', b'\r', b'\x0B', bytes).is_some() || memchr(b'\x0C', bytes).is_some() {
        return true;
    }
    if text.is_ascii() {
        return false;
    }
    text.chars().rev().any(is_line_break)
}

pub fn is_empty_or_whitespace(text: &str) -> bool {
    text.chars().all(is_breaking_whitespace)
}
