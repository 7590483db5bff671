//! Code-point level views of text.
//!
//! Everything here counts Unicode scalar values: a character outside the BMP
//! is one code point, never two.

use crate::unicode::simple_lowercase;
use smallvec::SmallVec;
use std::ops::Range;

#[inline]
pub fn code_point_count(text: &str) -> usize {
    if text.is_ascii() {
        return text.len();
    }
    text.chars().count()
}

/// Builds a one-character string, or an empty string for an invalid scalar.
pub fn new_single_code_point_string(code_point: u32) -> String {
    char::from_u32(code_point)
        .map(String::from)
        .unwrap_or_default()
}

/// Copies the code points of `text` into `destination`, optionally lowercasing
/// each one on the way. Lowercasing is locale unaware and strictly 1:1.
///
/// Returns the number of code points written. Panics if `destination` is
/// shorter than [`code_point_count`] of `text`.
pub fn copy_code_points(destination: &mut [u32], text: &str, downcase: bool) -> usize {
    let mut written = 0;
    for c in text.chars() {
        let c = if downcase { simple_lowercase(c) } else { c };
        destination[written] = c as u32;
        written += 1;
    }
    written
}

pub fn to_code_point_array(text: &str) -> Vec<u32> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut code_points = vec![0; code_point_count(text)];
    copy_code_points(&mut code_points, text, false);
    code_points
}

/// Code points of a byte range of `text`.
/// `None` if the range is out of bounds or splits a character.
pub fn to_code_point_array_in(text: &str, range: Range<usize>) -> Option<Vec<u32>> {
    text.get(range).map(to_code_point_array)
}

pub fn to_lowercase_code_point_array(text: &str) -> Vec<u32> {
    let mut code_points = vec![0; code_point_count(text)];
    copy_code_points(&mut code_points, text, true);
    code_points
}

pub fn to_sorted_code_point_array(text: &str) -> Vec<u32> {
    let mut code_points = to_code_point_array(text);
    code_points.sort_unstable();
    code_points
}

/// Rebuilds a string from a buffer whose logical end is the first `0`.
/// Values that are not Unicode scalars are dropped.
pub fn string_from_null_terminated(code_points: &[u32]) -> String {
    code_points
        .iter()
        .take_while(|&&cp| cp != 0)
        .filter_map(|&cp| char::from_u32(cp))
        .collect()
}

/// Sorted, duplicate-free set of code points with binary-search membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePointSet {
    sorted: SmallVec<[u32; 16]>,
}

impl CodePointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every code point of `symbols` becomes a member.
    pub fn from_chars(symbols: &str) -> Self {
        symbols.chars().collect()
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.contains_code_point(c as u32)
    }

    #[inline]
    pub fn contains_code_point(&self, code_point: u32) -> bool {
        self.sorted.binary_search(&code_point).is_ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.sorted.iter().filter_map(|&cp| char::from_u32(cp))
    }
}

impl FromIterator<char> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter().map(|c| c as u32).collect()
    }
}

impl FromIterator<u32> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut sorted: SmallVec<[u32; 16]> = iter.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self { sorted }
    }
}
