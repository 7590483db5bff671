use crate::locale::{Locale, LocaleTag};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

/// Process-lifetime cache from raw locale strings to constructed locales.
///
/// Append-only. The whole check-then-insert sequence runs under one lock,
/// so a given string always yields the same `Arc` after its first lookup.
/// Share it by reference or `Arc` rather than through a global.
#[derive(Debug, Default)]
pub struct LocaleCache {
    locales: Mutex<HashMap<String, Arc<Locale>>>,
}

impl LocaleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale for a `language[_COUNTRY[_VARIANT]]` string, built on first use.
    pub fn construct_locale_from_string(&self, tag: &str) -> Arc<Locale> {
        // Locales are immutable once inserted, so a poisoned map is still consistent.
        let mut locales = self.locales.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(locale) = locales.get(tag) {
            trace!(tag, "locale cache hit");
            return Arc::clone(locale);
        }
        let locale = Arc::new(Locale::from_tag(&LocaleTag::parse(tag)));
        debug!(tag, locale = %locale, "constructed locale");
        locales.insert(tag.to_string(), Arc::clone(&locale));
        locale
    }

    pub fn len(&self) -> usize {
        self.locales
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
