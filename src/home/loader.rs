//! Homepage data loading in two tiers.
//!
//! Critical data (featured collections) must be present before anything
//! renders; a failure there fails the page. Deferred data (recommended
//! products) is fetched alongside and streamed in later; a failure there
//! only empties its section.

use std::sync::Arc;
use storefront_core::{
    catalog::{Collection, Product},
    error::StorefrontError,
    locale::I18n,
    traits::CommerceClient,
};
use tracing::{debug, info};

use super::deferred::Deferred;

/// Featured collections shown above the fold.
pub const FEATURED_COLLECTION_LIMIT: usize = 3;

/// Loader output: the critical half is ready, the deferred half settles later.
#[derive(Debug)]
pub struct HomeData {
    pub featured_collections: Vec<Collection>,
    pub recommended_products: Deferred<Vec<Product>>,
}

/// Load everything the homepage needs.
///
/// The deferred fetch is started first so it overlaps with the critical one.
pub async fn load_home(client: Arc<dyn CommerceClient>, i18n: I18n) -> Result<HomeData, StorefrontError> {
    let recommended_products = load_deferred(Arc::clone(&client), i18n);
    let featured_collections = load_critical(client.as_ref(), i18n).await?;
    info!(
        "home: loaded {} featured collections via {} ({})",
        featured_collections.len(),
        client.name(),
        i18n.language
    );
    Ok(HomeData {
        featured_collections,
        recommended_products,
    })
}

async fn load_critical(client: &dyn CommerceClient, i18n: I18n) -> Result<Vec<Collection>, StorefrontError> {
    let mut collections = client.featured_collections(i18n).await?;
    collections.truncate(FEATURED_COLLECTION_LIMIT);
    Ok(collections)
}

fn load_deferred(client: Arc<dyn CommerceClient>, i18n: I18n) -> Deferred<Vec<Product>> {
    debug!("home: starting deferred recommended products fetch");
    Deferred::spawn("recommended products", async move {
        client.recommended_products(i18n).await
    })
}
