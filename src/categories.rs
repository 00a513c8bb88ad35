//! Curated collector categories shown in the header and on the homepage.
//!
//! Each handle must match a collection in the commerce backend.

/// A curated category: collection handle plus the copy key for its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub handle: &'static str,
    pub translation_key: &'static str,
}

impl Category {
    /// Storefront path of the category's collection page.
    pub fn path(&self) -> String {
        format!("/collections/{}", self.handle)
    }
}

pub const COLLECTOR_CATEGORIES: &[Category] = &[
    Category {
        handle: "pokemon",
        translation_key: "navPokemon",
    },
    Category {
        handle: "star-wars",
        translation_key: "navStarWars",
    },
    Category {
        handle: "trading-cards",
        translation_key: "navTradingCards",
    },
    Category {
        handle: "pop-figures",
        translation_key: "navPopFigures",
    },
    Category {
        handle: "action-figures",
        translation_key: "navActionFigures",
    },
    Category {
        handle: "hot-wheels",
        translation_key: "navHotWheels",
    },
];
