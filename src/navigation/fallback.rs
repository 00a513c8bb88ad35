//! Menu used when the content system has no header menu.
//!
//! No `/collections` entry: category-driven navigation already links there.

use storefront_core::menu::{Menu, MenuItem, MenuItemType};

pub fn fallback_header_menu() -> Menu {
    let mut about = MenuItem::new(
        "gid://shopify/MenuItem/461609599032",
        "About",
        Some("/pages/about"),
        MenuItemType::Page,
    );
    about.resource_id = Some("gid://shopify/Page/92591030328".to_string());

    Menu {
        id: "gid://shopify/Menu/199655587896".to_string(),
        items: vec![
            MenuItem::new(
                "gid://shopify/MenuItem/461609533496",
                "Blog",
                Some("/blogs/journal"),
                MenuItemType::Http,
            ),
            MenuItem::new(
                "gid://shopify/MenuItem/461609566264",
                "Policies",
                Some("/policies"),
                MenuItemType::Http,
            ),
            about,
        ],
    }
}
