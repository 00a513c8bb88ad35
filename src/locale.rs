//! Language detection from the inbound `Accept-Language` header.

use storefront_core::locale::{I18n, LanguageCode};

/// Pick the storefront language from an `Accept-Language` value.
///
/// Only the first (most preferred) entry counts: `"es-MX,es;q=0.9,en;q=0.8"`
/// is Spanish, `"en-US,es;q=0.9"` is English. Anything absent or
/// unrecognized is English.
pub fn language_from_accept_language(header: Option<&str>) -> LanguageCode {
    let first = header
        .unwrap_or_default()
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    if first.starts_with("es") {
        LanguageCode::Es
    } else {
        LanguageCode::En
    }
}

/// Language plus the commerce market it sells to.
pub fn i18n_from_accept_language(header: Option<&str>) -> I18n {
    I18n::for_language(language_from_accept_language(header))
}

/// Market for a request: an explicit language code wins over the header.
pub fn resolve_i18n(language: Option<&str>, accept_language: Option<&str>) -> I18n {
    match language {
        Some(code) => I18n::for_language(LanguageCode::from_code(code)),
        None => i18n_from_accept_language(accept_language),
    }
}
