//! GraphQL documents sent to the Storefront API.
//!
//! Every query runs `@inContext` so prices and copy come back for the
//! request's market.

/// Collections sorted by last update, newest first.
pub const FEATURED_COLLECTIONS_QUERY: &str = r#"
  fragment FeaturedCollection on Collection {
    id
    title
    image {
      id
      url
      altText
      width
      height
    }
    handle
  }
  query FeaturedCollections($country: CountryCode, $language: LanguageCode)
    @inContext(country: $country, language: $language) {
    collections(first: 6, sortKey: UPDATED_AT, reverse: true) {
      nodes {
        ...FeaturedCollection
      }
    }
  }
"#;

/// Products sorted by last update, newest first.
pub const RECOMMENDED_PRODUCTS_QUERY: &str = r#"
  fragment RecommendedProduct on Product {
    id
    title
    handle
    priceRange {
      minVariantPrice {
        amount
        currencyCode
      }
    }
    featuredImage {
      id
      url
      altText
      width
      height
    }
  }
  query RecommendedProducts($country: CountryCode, $language: LanguageCode)
    @inContext(country: $country, language: $language) {
    products(first: 4, sortKey: UPDATED_AT, reverse: true) {
      nodes {
        ...RecommendedProduct
      }
    }
  }
"#;

/// Shop name, primary domain, and one level of nested menu items.
pub const HEADER_QUERY: &str = r#"
  fragment MenuItem on MenuItem {
    id
    resourceId
    tags
    title
    type
    url
  }
  query Header($country: CountryCode, $headerMenuHandle: String!, $language: LanguageCode)
    @inContext(language: $language, country: $country) {
    shop {
      name
      primaryDomain {
        url
      }
    }
    menu(handle: $headerMenuHandle) {
      id
      items {
        ...MenuItem
        items {
          ...MenuItem
        }
      }
    }
  }
"#;
