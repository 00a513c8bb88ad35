mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StorefrontError;
use defaults::*;

/// Environment variable overriding `commerce.store_domain`.
pub const ENV_STORE_DOMAIN: &str = "PUBLIC_STORE_DOMAIN";
/// Environment variable overriding `commerce.storefront_api_token`.
pub const ENV_STOREFRONT_TOKEN: &str = "PUBLIC_STOREFRONT_API_TOKEN";

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub commerce: CommerceConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// File the config was read from; `None` when running on defaults.
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

/// General process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for rolling log files. Empty = stderr only.
    #[serde(default)]
    pub log_dir: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: String::new(),
        }
    }
}

/// Commerce API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommerceConfig {
    /// Shop domain the API is served from (e.g. `juguetes.myshopify.com`).
    #[serde(default)]
    pub store_domain: String,
    /// Public domain customers browse (e.g. `josesjuguetes.com`).
    #[serde(default)]
    pub public_store_domain: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Public Storefront API access token. Empty = API not configured.
    #[serde(default)]
    pub storefront_api_token: String,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            store_domain: String::new(),
            public_store_domain: String::new(),
            api_version: default_api_version(),
            storefront_api_token: String::new(),
        }
    }
}

impl CommerceConfig {
    /// Whether enough is configured to talk to the API.
    pub fn is_configured(&self) -> bool {
        !self.store_domain.is_empty() && !self.storefront_api_token.is_empty()
    }
}

/// How menu URLs are recognized as pointing at our own site.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainMatching {
    /// The URL contains a known domain anywhere (default).
    #[default]
    Substring,
    /// The URL's host equals a known domain or is a subdomain of it.
    Host,
}

/// Header navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Menu handle requested from the content system.
    #[serde(default = "default_menu_handle")]
    pub menu_handle: String,
    /// Prepend the curated collector categories to the menu.
    #[serde(default = "default_true")]
    pub collector_nav: bool,
    #[serde(default)]
    pub domain_matching: DomainMatching,
    /// Primary domain URL used when the shop query is unavailable.
    #[serde(default)]
    pub primary_domain_url: String,
    #[serde(default = "default_platform_domain")]
    pub platform_domain: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            menu_handle: default_menu_handle(),
            collector_nav: true,
            domain_matching: DomainMatching::default(),
            primary_domain_url: String::new(),
            platform_domain: default_platform_domain(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Apply environment overrides for secrets and deployment-specific values.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(domain) = lookup(ENV_STORE_DOMAIN).filter(|v| !v.is_empty()) {
        config.commerce.store_domain = domain;
    }
    if let Some(token) = lookup(ENV_STOREFRONT_TOKEN).filter(|v| !v.is_empty()) {
        config.commerce.storefront_api_token = token;
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. Environment overrides
/// are applied in both cases. Nothing is logged here since the subscriber
/// is installed from the result; callers report `loaded_from`.
pub fn load(path: &str) -> Result<Config, StorefrontError> {
    let path = Path::new(path);
    let mut config = if !path.exists() {
        Config::default()
    } else {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| StorefrontError::Config(format!("failed to parse config: {}", e)))?;
        config.loaded_from = Some(path.to_path_buf());
        config
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}
