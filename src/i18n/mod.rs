//! Internationalization — storefront copy in English and Spanish.
//!
//! Lookups never fail: a key missing in the requested language falls back
//! to English, and a key missing everywhere comes back as the key itself.

mod en;
mod es;

#[cfg(test)]
mod tests;

use storefront_core::locale::LanguageCode;

/// Static `(key, text)` tables, one per language.
pub struct TranslationTable {
    en: &'static [(&'static str, &'static str)],
    es: &'static [(&'static str, &'static str)],
}

/// The compiled-in storefront copy.
pub static TRANSLATIONS: TranslationTable = TranslationTable { en: en::EN, es: es::ES };

impl TranslationTable {
    fn entries(&self, lang: LanguageCode) -> &'static [(&'static str, &'static str)] {
        match lang {
            LanguageCode::En => self.en,
            LanguageCode::Es => self.es,
        }
    }

    /// Exact lookup in one language, no fallback.
    pub fn get(&self, lang: LanguageCode, key: &str) -> Option<&'static str> {
        self.entries(lang)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Look up `key` in `lang`, then English, then return `key` unchanged.
    pub fn t<'a>(&self, lang: LanguageCode, key: &'a str) -> &'a str {
        self.get(lang, key)
            .or_else(|| self.get(LanguageCode::En, key))
            .unwrap_or(key)
    }
}

/// Translation function bound to one language for a render pass.
#[derive(Clone, Copy)]
pub struct Translator {
    lang: LanguageCode,
    table: &'static TranslationTable,
}

impl Translator {
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            table: &TRANSLATIONS,
        }
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.table.t(self.lang, key)
    }
}
