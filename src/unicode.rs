//! Character predicates shared by every classifier in the crate.
//! All of them work on Unicode scalar values, never on UTF-8 bytes.

use icu_properties::{
    CodePointMapData, CodePointMapDataBorrowed,
    props::{GeneralCategory, GeneralCategoryGroup},
};

const GENERAL_CATEGORY: CodePointMapDataBorrowed<'static, GeneralCategory> =
    CodePointMapData::<GeneralCategory>::new();

pub const CODE_SPACE: char = ' ';
pub const CODE_PERIOD: char = '.';
pub const CODE_SLASH: char = '/';
pub const CODE_DOUBLE_QUOTE: char = '"';
pub const CODE_SINGLE_QUOTE: char = '\'';

/// Letter test used for case decisions: general category `L*`.
///
/// Letter-like numbers (`Ⅻ`), circled letters (`Ⓐ`) and combining vowel
/// signs are not letters.
#[inline(always)]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    GeneralCategoryGroup::Letter.contains(GENERAL_CATEGORY.get(c))
}

#[inline(always)]
pub fn is_upper(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    c.is_uppercase()
}

#[inline(always)]
pub fn is_lower(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_lowercase();
    }
    c.is_lowercase()
}

/// Decimal digit (`Nd`) in any script. `²`, `½` and `Ⅻ` are not digits.
#[inline(always)]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    GENERAL_CATEGORY.get(c) == GeneralCategory::DecimalNumber
}

// Breaking whitespace: space separators other than the no-break ones, the
// ASCII controls \t \n VT FF \r, the information separators 0x1C..=0x1F and
// the line/paragraph separators. NEL (0x85) is not included.
#[inline(always)]
pub fn is_breaking_whitespace(c: char) -> bool {
    matches!(
        c as u32,
        0x0009..=0x000D |
        0x001C..=0x0020 |
        0x1680 |          // OGHAM SPACE MARK
        0x2000..=0x2006 | // EN QUAD through SIX-PER-EM SPACE
        0x2008..=0x200A | // PUNCTUATION SPACE through HAIR SPACE
        0x2028 |          // LINE SEPARATOR
        0x2029 |          // PARAGRAPH SEPARATOR
        0x205F |          // MEDIUM MATHEMATICAL SPACE
        0x3000            // IDEOGRAPHIC SPACE
    )
}

#[inline(always)]
pub const fn is_line_break(c: char) -> bool {
    matches!(
        c as u32,
        0x000A | // LINE FEED
        0x000B | // VERTICAL TAB
        0x000C | // FORM FEED
        0x000D | // CARRIAGE RETURN
        0x0085 | // NEXT LINE
        0x2028 | // LINE SEPARATOR
        0x2029   // PARAGRAPH SEPARATOR
    )
}

/// Simple (1:1) lowercase mapping, locale unaware.
#[inline(always)]
pub fn simple_lowercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}
