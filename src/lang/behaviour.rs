use crate::lang::{CaseMap, LangEntry};

/// ---------------------------------------------------------------------------
/// LocaleCasing – language-aware casing on top of the root Unicode mappings
/// ---------------------------------------------------------------------------
pub trait LocaleCasing {
    fn upper_map(&self) -> &'static [CaseMap];
    fn lower_map(&self) -> &'static [CaseMap];

    /// Appends the uppercase form of `c`; may be longer than one char (ß → SS).
    #[inline(always)]
    fn push_upper(&self, c: char, out: &mut String) {
        if let Some(m) = self.upper_map().iter().find(|m| m.from == c) {
            out.push(m.to);
            return;
        }
        if c.is_ascii() {
            out.push(c.to_ascii_uppercase());
            return;
        }
        out.extend(c.to_uppercase());
    }

    #[inline(always)]
    fn push_lower(&self, c: char, out: &mut String) {
        if let Some(m) = self.lower_map().iter().find(|m| m.from == c) {
            out.push(m.to);
            return;
        }
        if c.is_ascii() {
            out.push(c.to_ascii_lowercase());
            return;
        }
        out.extend(c.to_lowercase());
    }

    fn to_upper(&self, text: &str) -> String {
        if self.upper_map().is_empty() {
            return text.to_uppercase();
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            self.push_upper(c, &mut out);
        }
        out
    }

    fn to_lower(&self, text: &str) -> String {
        // str::to_lowercase knows about final sigma; keep it whenever possible.
        if self.lower_map().is_empty() {
            return text.to_lowercase();
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            self.push_lower(c, &mut out);
        }
        out
    }
}

impl LocaleCasing for LangEntry {
    #[inline(always)]
    fn upper_map(&self) -> &'static [CaseMap] {
        self.upper_map
    }
    #[inline(always)]
    fn lower_map(&self) -> &'static [CaseMap] {
        self.lower_map
    }
}
