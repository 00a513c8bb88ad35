//! CLI command handlers. Each prints JSON view models on stdout.

#[cfg(test)]
mod tests;

use anyhow::Context as _;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use storefront_commerce::StorefrontClient;
use storefront_core::{
    config::Config,
    locale::I18n,
    menu::{Menu, MenuItem},
    traits::CommerceClient,
};
use tracing::{info, warn};

use crate::header::{build_header, SessionState};
use crate::home::{build_home_view, load_home, recommended_section};
use crate::i18n::Translator;
use crate::navigation::{build_navigation, fallback_header_menu, known_domains, NavOptions, Viewport};

/// Menu items plus the primary domain they should be resolved against.
#[derive(Debug)]
pub struct MenuSource {
    pub items: Vec<MenuItem>,
    pub primary_domain_url: String,
}

/// Parse a menu file: either a full `{"id", "items"}` menu or a bare item list.
pub fn parse_menu_json(content: &str) -> anyhow::Result<Vec<MenuItem>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum MenuFile {
        Menu(Menu),
        Items(Vec<MenuItem>),
    }
    let parsed: MenuFile = serde_json::from_str(content).context("invalid menu JSON")?;
    Ok(match parsed {
        MenuFile::Menu(menu) => menu.items,
        MenuFile::Items(items) => items,
    })
}

/// Where the header menu comes from, in order of preference: an explicit
/// file, the commerce API, the compiled-in fallback.
async fn resolve_menu(cfg: &Config, menu_file: Option<&Path>, i18n: I18n) -> anyhow::Result<MenuSource> {
    let configured_domain = cfg.navigation.primary_domain_url.clone();

    if let Some(path) = menu_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read menu file {}", path.display()))?;
        return Ok(MenuSource {
            items: parse_menu_json(&content)?,
            primary_domain_url: configured_domain,
        });
    }

    if cfg.commerce.is_configured() {
        let client = StorefrontClient::from_config(&cfg.commerce);
        let header = client.header(&cfg.navigation.menu_handle, i18n).await?;
        let items = match header.menu {
            Some(menu) => menu.items,
            None => fallback_header_menu().items,
        };
        let primary_domain_url = if header.primary_domain_url.is_empty() {
            configured_domain
        } else {
            header.primary_domain_url
        };
        return Ok(MenuSource {
            items,
            primary_domain_url,
        });
    }

    info!("commerce API not configured, using fallback header menu");
    Ok(MenuSource {
        items: fallback_header_menu().items,
        primary_domain_url: configured_domain,
    })
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json(&mut std::io::stdout().lock(), value, true)
}

/// `storefront nav`
pub async fn nav(
    cfg: &Config,
    i18n: I18n,
    viewport: Viewport,
    collector_nav: bool,
    menu_file: Option<&Path>,
) -> anyhow::Result<()> {
    let source = resolve_menu(cfg, menu_file, i18n).await?;
    let known = known_domains(
        &cfg.navigation,
        &cfg.commerce.public_store_domain,
        &source.primary_domain_url,
    );
    let links = build_navigation(
        &source.items,
        &known,
        NavOptions {
            viewport,
            collector_nav,
            translator: Translator::new(i18n.language),
        },
    );
    print_json(&links)
}

/// `storefront header`
pub async fn header(
    cfg: &Config,
    i18n: I18n,
    session: SessionState,
    menu_file: Option<&Path>,
) -> anyhow::Result<()> {
    let source = resolve_menu(cfg, menu_file, i18n).await?;
    let known = known_domains(
        &cfg.navigation,
        &cfg.commerce.public_store_domain,
        &source.primary_domain_url,
    );
    let view = build_header(
        &source.items,
        &known,
        cfg.navigation.collector_nav,
        session,
        Translator::new(i18n.language),
    );
    print_json(&view)
}

/// `storefront home`
pub async fn home(cfg: &Config, i18n: I18n) -> anyhow::Result<()> {
    if !cfg.commerce.is_configured() {
        anyhow::bail!(
            "commerce API is not configured. Set commerce.store_domain and \
             commerce.storefront_api_token in the config file or the \
             PUBLIC_STORE_DOMAIN / PUBLIC_STOREFRONT_API_TOKEN env vars."
        );
    }
    let client: Arc<dyn CommerceClient> = Arc::new(StorefrontClient::from_config(&cfg.commerce));
    stream_home(client, i18n, std::io::stdout()).await
}

/// Write the homepage as JSON lines: the page as soon as the critical data
/// is in, then the recommended section once the deferred fetch settles.
pub async fn stream_home<W>(client: Arc<dyn CommerceClient>, i18n: I18n, mut out: W) -> anyhow::Result<()>
where
    W: Write + Send + 'static,
{
    let tr = Translator::new(i18n.language);
    let data = load_home(client, i18n).await?;
    write_json(&mut out, &build_home_view(&data.featured_collections, tr), false)?;

    let streamed = data
        .recommended_products
        .on_ready(move |products| write_json(&mut out, &recommended_section(products, tr), false));
    streamed
        .await?
        .inspect_err(|e| warn!("home: failed to write recommended section: {e}"))
}

/// `storefront status`
pub async fn status(cfg: &Config, config_path: &str) -> anyhow::Result<()> {
    println!("Storefront \u{2014} Status Check\n");
    println!("Config: {config_path}");
    println!("Menu handle: {}", cfg.navigation.menu_handle);
    println!(
        "Collector nav: {}",
        if cfg.navigation.collector_nav { "on" } else { "off" }
    );
    println!("Domain matching: {:?}", cfg.navigation.domain_matching);
    println!();

    if !cfg.commerce.is_configured() {
        println!("  commerce API: not configured");
        return Ok(());
    }
    let client = StorefrontClient::from_config(&cfg.commerce);
    let available = client.is_available().await;
    println!(
        "  commerce API ({}): {}",
        client.endpoint(),
        if available { "available" } else { "unreachable" }
    );
    Ok(())
}
