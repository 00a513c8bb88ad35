//! Language and country context passed to every commerce query.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the storefront ships copy for. English is the fallback.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LanguageCode {
    #[default]
    En,
    Es,
}

impl LanguageCode {
    /// Two-letter code as the commerce API expects it (`EN`, `ES`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
        }
    }

    /// Lenient parse of a stored language code.
    ///
    /// Anything that is not `ES` (case-insensitive) binds English.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("es") {
            Self::Es
        } else {
            Self::En
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Countries the storefront prices and ships for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    #[default]
    Us,
    Mx,
}

impl CountryCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Mx => "MX",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved `(language, country)` pair for one request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18n {
    pub language: LanguageCode,
    pub country: CountryCode,
}

impl I18n {
    /// The market paired with each language: English sells to the US,
    /// Spanish to Mexico.
    pub fn for_language(language: LanguageCode) -> Self {
        let country = match language {
            LanguageCode::En => CountryCode::Us,
            LanguageCode::Es => CountryCode::Mx,
        };
        Self { language, country }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_lenient() {
        assert_eq!(LanguageCode::from_code("ES"), LanguageCode::Es);
        assert_eq!(LanguageCode::from_code(" es "), LanguageCode::Es);
        assert_eq!(LanguageCode::from_code("EN"), LanguageCode::En);
        assert_eq!(LanguageCode::from_code("fr"), LanguageCode::En);
        assert_eq!(LanguageCode::from_code(""), LanguageCode::En);
    }

    #[test]
    fn test_i18n_market_pairs() {
        assert_eq!(
            I18n::for_language(LanguageCode::Es),
            I18n {
                language: LanguageCode::Es,
                country: CountryCode::Mx
            }
        );
        assert_eq!(I18n::for_language(LanguageCode::En).country, CountryCode::Us);
    }

    #[test]
    fn test_serde_uses_api_codes() {
        let json = serde_json::to_string(&I18n::for_language(LanguageCode::Es)).unwrap();
        assert_eq!(json, r#"{"language":"ES","country":"MX"}"#);
    }
}
