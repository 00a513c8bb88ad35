mod categories;
mod commands;
mod header;
mod home;
mod i18n;
mod locale;
mod logging;
mod navigation;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use header::SessionState;
use locale::resolve_i18n;
use navigation::Viewport;
use std::path::PathBuf;
use storefront_core::config;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "storefront",
    version,
    about = "Jose's Juguetes storefront: navigation, copy, and homepage data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "storefront.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the header navigation links.
    Nav {
        /// Raw Accept-Language header value.
        #[arg(short = 'l', long)]
        accept_language: Option<String>,
        /// Language code (`en`, `es`); overrides Accept-Language.
        #[arg(long)]
        language: Option<String>,
        #[arg(long, value_enum, default_value_t = Viewport::Desktop)]
        viewport: Viewport,
        /// Show only the menu, without the collector categories.
        #[arg(long)]
        no_collector_nav: bool,
        /// Read the menu from a JSON file instead of the commerce API.
        #[arg(long)]
        menu: Option<PathBuf>,
    },
    /// Print the full header view.
    Header {
        #[arg(short = 'l', long)]
        accept_language: Option<String>,
        /// Language code (`en`, `es`); overrides Accept-Language.
        #[arg(long)]
        language: Option<String>,
        /// Render the account link for a signed-in customer.
        #[arg(long)]
        logged_in: bool,
        /// Items in the cart; omit while the cart is unknown.
        #[arg(long)]
        cart_count: Option<u32>,
        #[arg(long)]
        menu: Option<PathBuf>,
    },
    /// Load the homepage and stream its sections as JSON lines.
    Home {
        #[arg(short = 'l', long)]
        accept_language: Option<String>,
        /// Language code (`en`, `es`); overrides Accept-Language.
        #[arg(long)]
        language: Option<String>,
    },
    /// Check configuration and commerce API reachability.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config))?;
    let _log_guard = logging::init(&cfg.storefront)?;
    match &cfg.loaded_from {
        Some(path) => info!("loaded config from {}", path.display()),
        None => info!("config file {} not found, using defaults", cli.config),
    }

    match cli.command {
        Commands::Nav {
            accept_language,
            language,
            viewport,
            no_collector_nav,
            menu,
        } => {
            let collector_nav = cfg.navigation.collector_nav && !no_collector_nav;
            commands::nav(
                &cfg,
                resolve_i18n(language.as_deref(), accept_language.as_deref()),
                viewport,
                collector_nav,
                menu.as_deref(),
            )
            .await?;
        }
        Commands::Header {
            accept_language,
            language,
            logged_in,
            cart_count,
            menu,
        } => {
            let session = SessionState {
                logged_in: Some(logged_in),
                cart_quantity: cart_count,
            };
            let i18n = resolve_i18n(language.as_deref(), accept_language.as_deref());
            commands::header(&cfg, i18n, session, menu.as_deref()).await?;
        }
        Commands::Home {
            accept_language,
            language,
        } => {
            let i18n = resolve_i18n(language.as_deref(), accept_language.as_deref());
            commands::home(&cfg, i18n).await?;
        }
        Commands::Status => {
            commands::status(&cfg, &cli.config).await?;
        }
    }

    Ok(())
}
