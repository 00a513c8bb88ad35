//! Header navigation — menu data in, ordered link list out.
//!
//! Pipeline: each menu item's URL is normalized to a site path, labeled
//! (localized for well-known destinations), then assembled behind the
//! optional collector categories. Everything here is pure; identical inputs
//! give identical output in identical order.

mod fallback;
mod label;
mod path;


pub use fallback::fallback_header_menu;
pub use label::resolve_menu_label;
pub use path::{normalize_menu_path, KnownDomains};

use crate::categories::{Category, COLLECTOR_CATEGORIES};
use crate::i18n::Translator;
use serde::{Deserialize, Serialize};
use storefront_core::config::NavigationConfig;
use storefront_core::menu::MenuItem;

/// Path of the "All Collections" page.
pub const ALL_COLLECTIONS_PATH: &str = "/collections";

/// One rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub path: String,
    pub label: String,
}

impl NavigationLink {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Layout the menu is rendered into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

/// Per-render navigation options.
#[derive(Clone, Copy)]
pub struct NavOptions {
    pub viewport: Viewport,
    /// Lead with the collector categories and "All Collections".
    pub collector_nav: bool,
    pub translator: Translator,
}

/// Known own-site domains for one shop: the platform domain, the public
/// store domain, and the shop's primary domain URL.
pub fn known_domains(
    nav: &NavigationConfig,
    public_store_domain: &str,
    primary_domain_url: &str,
) -> KnownDomains {
    KnownDomains::new(
        [
            nav.platform_domain.as_str(),
            public_store_domain,
            primary_domain_url,
        ],
        nav.domain_matching,
    )
}

/// Links for the curated categories followed by one `/collections` link
/// labeled with the copy under `all_key`.
pub fn category_links(
    categories: &[Category],
    all_key: &'static str,
    tr: Translator,
) -> Vec<NavigationLink> {
    categories
        .iter()
        .map(|cat| NavigationLink::new(cat.path(), tr.t(cat.translation_key)))
        .chain(std::iter::once(NavigationLink::new(
            ALL_COLLECTIONS_PATH,
            tr.t(all_key),
        )))
        .collect()
}

/// Links derived from the menu's top-level items, in source order.
///
/// Non-navigable items are skipped. With `skip_all_collections`, items
/// that resolve to `/collections` are skipped too.
pub fn menu_links(
    items: &[MenuItem],
    known: &KnownDomains,
    tr: Translator,
    skip_all_collections: bool,
) -> Vec<NavigationLink> {
    items
        .iter()
        .filter_map(|item| {
            let path = normalize_menu_path(item.url.as_deref(), known)?;
            if skip_all_collections && path == ALL_COLLECTIONS_PATH {
                return None;
            }
            let label = resolve_menu_label(&path, &item.title, tr).to_string();
            Some(NavigationLink { path, label })
        })
        .collect()
}

/// Assemble the full navigation list for one render.
pub fn build_navigation(
    items: &[MenuItem],
    known: &KnownDomains,
    opts: NavOptions,
) -> Vec<NavigationLink> {
    let tr = opts.translator;
    let mut links = Vec::new();

    if opts.viewport == Viewport::Mobile {
        links.push(NavigationLink::new("/", tr.t("navHome")));
    }
    if opts.collector_nav {
        links.extend(category_links(COLLECTOR_CATEGORIES, "navCollections", tr));
    }
    links.extend(menu_links(items, known, tr, opts.collector_nav));
    links
}
