//! Storefront GraphQL API client.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Instant;
use storefront_core::{
    catalog::{Collection, Product},
    config::CommerceConfig,
    error::StorefrontError,
    locale::I18n,
    menu::HeaderData,
    traits::CommerceClient,
};
use tracing::{debug, warn};

use crate::queries::{FEATURED_COLLECTIONS_QUERY, HEADER_QUERY, RECOMMENDED_PRODUCTS_QUERY};
use crate::response::{
    CollectionsData, ContextVariables, GraphqlRequest, GraphqlResponse, HeaderResponseData,
    HeaderVariables, ProductsData,
};

/// Header carrying the public Storefront API token.
const TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Client for the public Storefront GraphQL API.
pub struct StorefrontClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl StorefrontClient {
    /// Create from config values.
    pub fn from_config(cfg: &CommerceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: graphql_endpoint(&cfg.store_domain, &cfg.api_version),
            token: cfg.storefront_api_token.clone(),
        }
    }

    /// Fully-qualified GraphQL endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn query<T, V>(&self, operation: &str, query: &str, variables: V) -> Result<T, StorefrontError>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        let start = Instant::now();
        debug!("storefront: POST {} operation={operation}", self.endpoint);

        let resp = self
            .client
            .post(&self.endpoint)
            .header(TOKEN_HEADER, &self.token)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|e| StorefrontError::Commerce(format!("{operation} request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(StorefrontError::Commerce(format!(
                "{operation} returned {status}: {text}"
            )));
        }

        let body = resp.bytes().await.map_err(|e| {
            StorefrontError::Commerce(format!("{operation}: failed to read response: {e}"))
        })?;
        let parsed: GraphqlResponse<T> = serde_json::from_slice(&body)
            .inspect_err(|e| warn!("storefront: {operation} returned malformed JSON: {e}"))?;

        debug!(
            "storefront: {operation} completed in {}ms",
            start.elapsed().as_millis()
        );
        parsed.into_data(operation)
    }
}

/// Build the GraphQL endpoint from a store domain.
///
/// A bare domain gets `https://`; a domain that already carries a scheme is
/// used as-is (local proxies, tests).
pub fn graphql_endpoint(store_domain: &str, api_version: &str) -> String {
    let domain = store_domain.trim().trim_end_matches('/');
    let base = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };
    format!("{base}/api/{api_version}/graphql.json")
}

#[async_trait]
impl CommerceClient for StorefrontClient {
    fn name(&self) -> &str {
        "storefront-api"
    }

    async fn featured_collections(&self, i18n: I18n) -> Result<Vec<Collection>, StorefrontError> {
        let data: CollectionsData = self
            .query(
                "FeaturedCollections",
                FEATURED_COLLECTIONS_QUERY,
                ContextVariables {
                    country: i18n.country.as_str(),
                    language: i18n.language.as_str(),
                },
            )
            .await?;
        Ok(data.collections.nodes)
    }

    async fn recommended_products(&self, i18n: I18n) -> Result<Vec<Product>, StorefrontError> {
        let data: ProductsData = self
            .query(
                "RecommendedProducts",
                RECOMMENDED_PRODUCTS_QUERY,
                ContextVariables {
                    country: i18n.country.as_str(),
                    language: i18n.language.as_str(),
                },
            )
            .await?;
        Ok(data.products.nodes.into_iter().map(Product::from).collect())
    }

    async fn header(&self, menu_handle: &str, i18n: I18n) -> Result<HeaderData, StorefrontError> {
        let data: HeaderResponseData = self
            .query(
                "Header",
                HEADER_QUERY,
                HeaderVariables {
                    country: i18n.country.as_str(),
                    language: i18n.language.as_str(),
                    header_menu_handle: menu_handle,
                },
            )
            .await?;
        if data.menu.is_none() {
            warn!("storefront: menu '{menu_handle}' not found");
        }
        Ok(data.into())
    }

    async fn is_available(&self) -> bool {
        if self.token.is_empty() {
            warn!("storefront: no API token configured");
            return false;
        }
        let probe: Result<serde_json::Value, _> = self
            .query("ShopProbe", "query ShopProbe { shop { name } }", serde_json::json!({}))
            .await;
        match probe {
            Ok(_) => true,
            Err(e) => {
                warn!("storefront API not available: {e}");
                false
            }
        }
    }
}
