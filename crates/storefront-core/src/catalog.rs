use serde::{Deserialize, Serialize};

/// Image reference served by the commerce CDN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A collection as shown in the featured section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub image: Option<Image>,
}

/// Monetary amount. The API sends the amount as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

impl Money {
    /// `"19.99 USD"`; falls back to the raw amount when it is not a plain
    /// decimal. Extra fraction digits are truncated, never rounded.
    pub fn display(&self) -> String {
        match two_decimals(&self.amount) {
            Some(amount) => format!("{amount} {}", self.currency_code),
            None => format!("{} {}", self.amount, self.currency_code),
        }
    }
}

/// Render a decimal string with exactly two fraction digits, working on
/// the digits themselves so large amounts keep their precision.
fn two_decimals(amount: &str) -> Option<String> {
    let amount = amount.trim();
    let (sign, digits) = match amount.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", amount),
    };
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty()) || !is_digits(int) || !is_digits(frac) {
        return None;
    }
    let int = if int.is_empty() { "0" } else { int };
    let cents: String = frac.chars().chain("00".chars()).take(2).collect();
    Some(format!("{sign}{int}.{cents}"))
}

/// A product recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub handle: String,
    /// Lowest variant price.
    pub price: Money,
    #[serde(default)]
    pub image: Option<Image>,
}
