//! Lowercase hex encoding for opaque tokens kept in key-value preference stores.
//!
//! Format: two lowercase hex digits per byte, no separators. An empty byte
//! slice encodes to the empty string and the empty string decodes to no bytes.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("input hex string length must be an even number, length = {len}")]
    OddLength { len: usize },

    #[error("invalid hex digit {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub fn byte_array_to_hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

pub fn hex_string_to_byte_array(hex: &str) -> Result<Vec<u8>, HexError> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }
    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for index in (0..digits.len()).step_by(2) {
        let high = nibble(hex, index)?;
        let low = nibble(hex, index + 1)?;
        bytes.push((high << 4) | low);
    }
    Ok(bytes)
}

// Digits are checked left to right, so the first non-ASCII byte is always
// the start of a character and slicing at `index` is safe.
#[inline]
fn nibble(hex: &str, index: usize) -> Result<u8, HexError> {
    let b = hex.as_bytes()[index];
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexError::InvalidDigit {
            index,
            found: hex[index..].chars().next().unwrap_or(b as char),
        }),
    }
}
