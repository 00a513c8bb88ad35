use serde::{Deserialize, Serialize};

/// A navigation menu as served by the content system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// A single navigable entry. Immutable input for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Target URL; absent or empty means the item is not navigable.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: MenuItemType,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Child items, in source order.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    /// Build a plain item without children.
    pub fn new(id: &str, title: &str, url: Option<&str>, item_type: MenuItemType) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            url: url.map(str::to_string),
            item_type,
            resource_id: None,
            tags: Vec::new(),
            items: Vec::new(),
        }
    }
}

/// Menu item kinds as reported by the commerce API.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuItemType {
    Frontpage,
    Collection,
    Collections,
    Product,
    Catalog,
    Page,
    Blog,
    Article,
    Search,
    ShopPolicy,
    #[default]
    Http,
    Metaobject,
    CustomerAccountPage,
    /// Types added upstream after this list was written.
    #[serde(other)]
    Unknown,
}

/// Shop-level data the header needs alongside the menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    pub shop_name: String,
    /// Full URL of the shop's primary domain (e.g. `https://store.example.com`).
    pub primary_domain_url: String,
    /// `None` when the requested menu handle does not exist.
    pub menu: Option<Menu>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_from_api_json() {
        let json = r#"{
            "id": "gid://shopify/MenuItem/1",
            "resourceId": "gid://shopify/Page/9",
            "tags": [],
            "title": "About",
            "type": "PAGE",
            "url": "https://store.example.com/pages/about",
            "items": []
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, MenuItemType::Page);
        assert_eq!(item.resource_id.as_deref(), Some("gid://shopify/Page/9"));
        assert_eq!(
            item.url.as_deref(),
            Some("https://store.example.com/pages/about")
        );
    }

    #[test]
    fn test_unknown_item_type_and_null_url() {
        let json = r#"{"id": "x", "title": "Mystery", "type": "SOMETHING_NEW", "url": null}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, MenuItemType::Unknown);
        assert!(item.url.is_none());
        assert!(item.items.is_empty());
    }

    #[test]
    fn test_nested_items_keep_order() {
        let json = r#"{"id": "m", "items": [
            {"id": "a", "title": "A", "type": "HTTP", "url": "/a",
             "items": [{"id": "a1", "title": "A1", "type": "HTTP", "url": "/a/1"}]},
            {"id": "b", "title": "B", "type": "HTTP", "url": "/b"}
        ]}"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = menu.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(menu.items[0].items[0].id, "a1");
    }
}
