//! # storefront-commerce
//!
//! Storefront GraphQL API client implementing `CommerceClient`.

pub mod client;
pub mod queries;
mod response;


pub use client::StorefrontClient;
