use crate::{
    catalog::{Collection, Product},
    error::StorefrontError,
    locale::I18n,
    menu::HeaderData,
};
use async_trait::async_trait;

/// Commerce data source — the read-only catalog.
///
/// Every backend (the Storefront GraphQL API, fixtures in tests) implements
/// this trait. All queries are parameterized by the request's language and
/// country.
#[async_trait]
pub trait CommerceClient: Send + Sync {
    /// Human-readable client name.
    fn name(&self) -> &str;

    /// Most recently updated collections, newest first.
    async fn featured_collections(&self, i18n: I18n) -> Result<Vec<Collection>, StorefrontError>;

    /// Most recently updated products, newest first.
    async fn recommended_products(&self, i18n: I18n) -> Result<Vec<Product>, StorefrontError>;

    /// Shop metadata plus the navigation menu with the given handle.
    async fn header(&self, menu_handle: &str, i18n: I18n) -> Result<HeaderData, StorefrontError>;

    /// Check if the API is reachable with the configured credentials.
    async fn is_available(&self) -> bool;
}
