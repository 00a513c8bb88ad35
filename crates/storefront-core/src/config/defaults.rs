//! Default value functions used by serde for config deserialization.

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_api_version() -> String {
    "2025-01".to_string()
}

pub fn default_menu_handle() -> String {
    "main-menu".to_string()
}

/// Platform domain every shop is reachable under.
pub fn default_platform_domain() -> String {
    "myshopify.com".to_string()
}
