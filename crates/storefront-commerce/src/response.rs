//! Wire types for Storefront API responses.
//!
//! These mirror the GraphQL shapes; conversion into the core catalog types
//! happens here so the rest of the workspace never sees `nodes` wrappers.

use serde::{Deserialize, Serialize};
use storefront_core::{
    catalog::{Collection, Image, Money, Product},
    error::StorefrontError,
    menu::{HeaderData, Menu},
};

/// GraphQL request body.
#[derive(Serialize)]
pub(crate) struct GraphqlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// Variables shared by the catalog queries.
#[derive(Serialize)]
pub(crate) struct ContextVariables<'a> {
    pub country: &'a str,
    pub language: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HeaderVariables<'a> {
    pub country: &'a str,
    pub language: &'a str,
    pub header_menu_handle: &'a str,
}

/// Standard GraphQL response envelope.
#[derive(Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

impl<T> GraphqlResponse<T> {
    /// Unwrap `data`, turning reported errors into a commerce error.
    ///
    /// Partial data alongside errors is still treated as a failure.
    pub fn into_data(self, operation: &str) -> Result<T, StorefrontError> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(StorefrontError::Commerce(format!(
                "{operation}: {}",
                messages.join("; ")
            )));
        }
        self.data
            .ok_or_else(|| StorefrontError::Commerce(format!("{operation}: response has no data")))
    }
}

#[derive(Deserialize)]
pub(crate) struct Nodes<T> {
    pub nodes: Vec<T>,
}

#[derive(Deserialize)]
pub(crate) struct CollectionsData {
    pub collections: Nodes<Collection>,
}

#[derive(Deserialize)]
pub(crate) struct ProductsData {
    pub products: Nodes<ProductNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub price_range: PriceRange,
    #[serde(default)]
    pub featured_image: Option<Image>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PriceRange {
    pub min_variant_price: Money,
}

impl From<ProductNode> for Product {
    fn from(node: ProductNode) -> Self {
        Product {
            id: node.id,
            title: node.title,
            handle: node.handle,
            price: node.price_range.min_variant_price,
            image: node.featured_image,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct HeaderResponseData {
    pub shop: ShopNode,
    #[serde(default)]
    pub menu: Option<Menu>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShopNode {
    pub name: String,
    pub primary_domain: PrimaryDomain,
}

#[derive(Deserialize)]
pub(crate) struct PrimaryDomain {
    pub url: String,
}

impl From<HeaderResponseData> for HeaderData {
    fn from(data: HeaderResponseData) -> Self {
        HeaderData {
            shop_name: data.shop.name,
            primary_domain_url: data.shop.primary_domain.url,
            menu: data.menu,
        }
    }
}
