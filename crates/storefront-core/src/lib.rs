//! # storefront-core
//!
//! Core types, traits, configuration, and error handling for the storefront.

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod menu;
pub mod traits;
