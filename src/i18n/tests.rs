use super::*;
use std::collections::HashSet;

const ALL: [LanguageCode; 2] = [LanguageCode::En, LanguageCode::Es];

fn keys(lang: LanguageCode) -> impl Iterator<Item = &'static str> {
    TRANSLATIONS.entries(lang).iter().map(|(k, _)| *k)
}

fn t(lang: LanguageCode, key: &str) -> &str {
    TRANSLATIONS.t(lang, key)
}

#[test]
fn test_english_keys_never_fall_through_to_raw_key() {
    for key in keys(LanguageCode::En) {
        for lang in ALL {
            let val = t(lang, key);
            assert_ne!(val, key, "key '{key}' resolved to itself for {lang}");
            assert!(!val.is_empty(), "key '{key}' is empty for {lang}");
        }
    }
}

#[test]
fn test_spanish_keys_are_subset_of_english() {
    let en: HashSet<&str> = keys(LanguageCode::En).collect();
    for key in keys(LanguageCode::Es) {
        assert!(en.contains(key), "Spanish key '{key}' has no English fallback");
    }
}

#[test]
fn test_no_duplicate_keys() {
    for lang in ALL {
        let all: Vec<&str> = keys(lang).collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len(), "duplicate key in {lang} table");
    }
}

#[test]
fn test_spanish_lookup() {
    assert_eq!(t(LanguageCode::Es, "navCart"), "Carrito");
    assert_eq!(t(LanguageCode::Es, "navHome"), "Inicio");
    assert_eq!(t(LanguageCode::En, "navCart"), "Cart");
}

#[test]
fn test_spanish_falls_back_to_english() {
    assert!(TRANSLATIONS.get(LanguageCode::Es, "metaTitle").is_none());
    assert_eq!(
        t(LanguageCode::Es, "metaTitle"),
        t(LanguageCode::En, "metaTitle")
    );
}

#[test]
fn test_unknown_key_returns_key() {
    assert_eq!(t(LanguageCode::Es, "nonexistentKey"), "nonexistentKey");
    assert_eq!(t(LanguageCode::En, ""), "");
}

#[test]
fn test_translator_binds_language() {
    let es = Translator::new(LanguageCode::from_code("es"));
    assert_eq!(es.t("navAbout"), "Nosotros");
    let fallback = Translator::new(LanguageCode::from_code("FR"));
    assert_eq!(fallback.t("navAbout"), "About");
    assert_eq!(es.t("missingEverywhere"), "missingEverywhere");
}
