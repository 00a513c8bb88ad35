use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.storefront.log_level, "info");
    assert!(cfg.storefront.log_dir.is_empty());
    assert_eq!(cfg.commerce.api_version, "2025-01");
    assert!(!cfg.commerce.is_configured());
    assert_eq!(cfg.navigation.menu_handle, "main-menu");
    assert!(cfg.navigation.collector_nav);
    assert_eq!(cfg.navigation.domain_matching, DomainMatching::Substring);
    assert_eq!(cfg.navigation.platform_domain, "myshopify.com");
}

#[test]
fn test_full_config_from_toml() {
    let toml_str = r#"
        [storefront]
        log_level = "debug"
        log_dir = "/var/log/storefront"

        [commerce]
        store_domain = "juguetes.myshopify.com"
        public_store_domain = "josesjuguetes.com"
        api_version = "2024-10"
        storefront_api_token = "tok"

        [navigation]
        menu_handle = "header"
        collector_nav = false
        domain_matching = "host"
        primary_domain_url = "https://josesjuguetes.com"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert!(cfg.loaded_from.is_none());
    assert_eq!(cfg.storefront.log_level, "debug");
    assert_eq!(cfg.commerce.api_version, "2024-10");
    assert!(cfg.commerce.is_configured());
    assert_eq!(cfg.navigation.menu_handle, "header");
    assert!(!cfg.navigation.collector_nav);
    assert_eq!(cfg.navigation.domain_matching, DomainMatching::Host);
    assert_eq!(cfg.navigation.platform_domain, "myshopify.com");
}

#[test]
fn test_partial_sections_keep_defaults() {
    let toml_str = r#"
        [navigation]
        primary_domain_url = "https://store.example.com"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert!(cfg.navigation.collector_nav);
    assert_eq!(cfg.navigation.menu_handle, "main-menu");
    assert_eq!(cfg.commerce.api_version, "2025-01");
}

#[test]
fn test_invalid_domain_matching_rejected() {
    let toml_str = r#"
        [navigation]
        domain_matching = "regex"
    "#;
    assert!(toml::from_str::<Config>(toml_str).is_err());
}

#[test]
fn test_env_overrides() {
    let mut cfg = Config::default();
    apply_env_overrides(&mut cfg, |key| match key {
        ENV_STORE_DOMAIN => Some("juguetes.myshopify.com".into()),
        ENV_STOREFRONT_TOKEN => Some("secret".into()),
        _ => None,
    });
    assert_eq!(cfg.commerce.store_domain, "juguetes.myshopify.com");
    assert_eq!(cfg.commerce.storefront_api_token, "secret");
    assert!(cfg.commerce.is_configured());
}

#[test]
fn test_empty_env_values_ignored() {
    let mut cfg = Config::default();
    cfg.commerce.storefront_api_token = "from-file".into();
    apply_env_overrides(&mut cfg, |_| Some(String::new()));
    assert_eq!(cfg.commerce.storefront_api_token, "from-file");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__storefront_test__/storefront.toml").unwrap();
    assert_eq!(cfg.navigation.menu_handle, "main-menu");
    assert!(cfg.loaded_from.is_none());
}

#[test]
fn test_load_reports_parse_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[navigation\nbroken").unwrap();
    let err = load(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, StorefrontError::Config(_)));
}

#[test]
fn test_load_reports_read_errors_as_io() {
    // A directory exists but cannot be read as a file.
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, StorefrontError::Io(_)), "got: {err}");
}

#[test]
fn test_load_reads_file_and_applies_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[navigation]\nmenu_handle = \"header\"\n").unwrap();
    let cfg = load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.navigation.menu_handle, "header");
    assert!(cfg.navigation.collector_nav);
    assert_eq!(cfg.loaded_from.as_deref(), Some(file.path()));
}
