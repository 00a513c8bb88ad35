//! Homepage view model.

use serde::Serialize;
use storefront_core::catalog::{Collection, Product};

use crate::categories::COLLECTOR_CATEGORIES;
use crate::i18n::Translator;
use crate::navigation::{category_links, NavigationLink, ALL_COLLECTIONS_PATH};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub meta_title: String,
    pub hero: Hero,
    pub categories: CategoryGrid,
    /// Omitted entirely when there are no collections to feature.
    pub featured: Option<FeaturedSection>,
    pub recommended: RecommendedSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub headline: String,
    pub subhead: String,
    pub cta: NavigationLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGrid {
    pub heading: String,
    pub subheading: String,
    pub tiles: Vec<NavigationLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedSection {
    pub heading: String,
    pub cards: Vec<CollectionCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionCard {
    pub id: String,
    pub title: String,
    pub path: String,
    pub image_url: Option<String>,
    /// Shown in place of a missing image.
    pub placeholder: Option<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedSection {
    pub heading: String,
    #[serde(flatten)]
    pub state: RecommendedState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RecommendedState {
    /// Still streaming in; the client shows `label`.
    Loading { label: String },
    Ready { products: Vec<ProductCard> },
    /// The fetch failed; the section renders empty rather than erroring.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub path: String,
    pub price: String,
    pub image_url: Option<String>,
}

/// Build the homepage with the recommended section still loading.
pub fn build_home_view(featured: &[Collection], tr: Translator) -> HomeView {
    HomeView {
        meta_title: tr.t("metaTitle").to_string(),
        hero: Hero {
            headline: tr.t("heroHeadline").to_string(),
            subhead: tr.t("heroSubhead").to_string(),
            cta: NavigationLink::new(ALL_COLLECTIONS_PATH, tr.t("heroCta")),
        },
        categories: category_grid(tr),
        featured: featured_section(featured, tr),
        recommended: RecommendedSection {
            heading: tr.t("recommendedProducts").to_string(),
            state: RecommendedState::Loading {
                label: tr.t("loading").to_string(),
            },
        },
    }
}

/// The recommended section once the deferred fetch has settled.
pub fn recommended_section(products: Option<Vec<Product>>, tr: Translator) -> RecommendedSection {
    let state = match products {
        Some(products) => RecommendedState::Ready {
            products: products.iter().map(product_card).collect(),
        },
        None => RecommendedState::Unavailable,
    };
    RecommendedSection {
        heading: tr.t("recommendedProducts").to_string(),
        state,
    }
}

fn category_grid(tr: Translator) -> CategoryGrid {
    CategoryGrid {
        heading: tr.t("shopByCategory").to_string(),
        subheading: tr.t("shopByCategorySub").to_string(),
        tiles: category_links(COLLECTOR_CATEGORIES, "viewAllCollections", tr),
    }
}

fn featured_section(collections: &[Collection], tr: Translator) -> Option<FeaturedSection> {
    if collections.is_empty() {
        return None;
    }
    let cta = tr.t("shopCta");
    Some(FeaturedSection {
        heading: tr.t("featuredCollection").to_string(),
        cards: collections
            .iter()
            .map(|c| CollectionCard {
                id: c.id.clone(),
                title: c.title.clone(),
                path: format!("/collections/{}", c.handle),
                image_url: c.image.as_ref().map(|i| i.url.clone()),
                placeholder: c.image.is_none().then(|| title_initials(&c.title)),
                cta: cta.to_string(),
            })
            .collect(),
    })
}

fn product_card(p: &Product) -> ProductCard {
    ProductCard {
        id: p.id.clone(),
        title: p.title.clone(),
        path: format!("/products/{}", p.handle),
        price: p.price.display(),
        image_url: p.image.as_ref().map(|i| i.url.clone()),
    }
}

/// First two characters of a title, uppercased.
fn title_initials(title: &str) -> String {
    title.chars().take(2).collect::<String>().to_uppercase()
}
