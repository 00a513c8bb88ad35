use super::*;
use crate::home::tests::{Recommended, StubCommerce};
use std::io::Write as _;
use std::sync::Mutex;
use storefront_core::locale::LanguageCode;
use storefront_core::menu::MenuItemType;

/// Writer whose contents stay readable after it moves into a task.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn json_lines(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

#[test]
fn test_parse_full_menu() {
    let json = r#"{"id": "gid://shopify/Menu/1", "items": [
        {"id": "a", "title": "Catalog", "type": "CATALOG", "url": "/collections"}
    ]}"#;
    let items = parse_menu_json(json).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_type, MenuItemType::Catalog);
}

#[test]
fn test_parse_bare_item_list() {
    let json = r#"[
        {"id": "a", "title": "Blog", "url": "/blogs/news"},
        {"id": "b", "title": "Dead link", "url": null}
    ]"#;
    let items = parse_menu_json(json).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[1].url.is_none());
}

#[test]
fn test_parse_invalid_menu() {
    assert!(parse_menu_json("not json").is_err());
    assert!(parse_menu_json(r#"{"items": 3}"#).is_err());
}

#[tokio::test]
async fn test_resolve_menu_falls_back_without_api() {
    let mut cfg = Config::default();
    cfg.navigation.primary_domain_url = "https://store.example.com".into();
    let source = resolve_menu(&cfg, None, I18n::default()).await.unwrap();
    assert_eq!(source.items, fallback_header_menu().items);
    assert_eq!(source.primary_domain_url, "https://store.example.com");
}

#[tokio::test]
async fn test_resolve_menu_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "x", "title": "Sale", "url": "https://store.example.com/collections/sale/"}}]"#
    )
    .unwrap();
    let source = resolve_menu(&Config::default(), Some(file.path()), I18n::default())
        .await
        .unwrap();
    assert_eq!(source.items[0].title, "Sale");
}

#[tokio::test]
async fn test_resolve_menu_missing_file() {
    let missing = Path::new("/nonexistent/__storefront_menu__.json");
    let err = resolve_menu(&Config::default(), Some(missing), I18n::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("failed to read menu file"));
}

#[tokio::test]
async fn test_home_requires_configured_api() {
    let err = home(&Config::default(), I18n::for_language(LanguageCode::Es))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not configured"));
}

#[tokio::test]
async fn test_home_streams_page_then_recommended() {
    let out = SharedBuf::default();
    let client = Arc::new(StubCommerce::new(false, Recommended::Succeed));
    stream_home(client, I18n::default(), out.clone()).await.unwrap();

    let lines = out.json_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["recommended"]["status"], "loading");
    assert_eq!(lines[0]["featured"]["cards"].as_array().unwrap().len(), 3);
    assert_eq!(lines[1]["status"], "ready");
    assert_eq!(lines[1]["products"][0]["path"], "/products/darth-vader-pop");
}

#[tokio::test]
async fn test_home_streams_unavailable_when_deferred_fails() {
    let out = SharedBuf::default();
    let client = Arc::new(StubCommerce::new(false, Recommended::Fail));
    stream_home(client, I18n::for_language(LanguageCode::Es), out.clone())
        .await
        .unwrap();

    let lines = out.json_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["recommended"]["status"], "loading");
    assert_eq!(lines[1]["status"], "unavailable");
    assert_eq!(lines[1]["heading"], "Recomendados para ti");
}

#[tokio::test]
async fn test_home_critical_failure_writes_nothing() {
    let out = SharedBuf::default();
    let client = Arc::new(StubCommerce::new(true, Recommended::Succeed));
    assert!(stream_home(client, I18n::default(), out.clone()).await.is_err());
    assert!(out.json_lines().is_empty());
}
