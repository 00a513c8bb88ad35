//! English copy. Every key used anywhere in the storefront lives here.

pub(super) const EN: &[(&str, &str)] = &[
    // --- Brand ---
    ("brandName", "Jose's Juguetes"),
    ("brandTagline", "Collect \u{2022} Bid \u{2022} Buy"),
    ("brandTaglineShort", "Jose's Toys \u{2014} Collectibles & more"),
    // --- Nav ---
    ("navHome", "Home"),
    ("navCollections", "All Collections"),
    ("navCategories", "Shop by Category"),
    ("navPokemon", "Pok\u{e9}mon"),
    ("navStarWars", "Star Wars"),
    ("navTradingCards", "Trading Cards"),
    ("navPopFigures", "POP! Figures"),
    ("navActionFigures", "Action Figures"),
    ("navHotWheels", "Hot Wheels"),
    ("navBlog", "Blog"),
    ("navPolicies", "Policies"),
    ("navAbout", "About"),
    ("navAccount", "Account"),
    ("navSignIn", "Sign in"),
    ("navCart", "Cart"),
    ("navSearch", "Search"),
    // --- Home ---
    ("metaTitle", "Jose's Juguetes \u{2014} Collectibles & Toys"),
    ("heroHeadline", "Collectibles you'll love"),
    (
        "heroSubhead",
        "Find rare toys, POP! figures, trading cards & more. Bid or buy \u{2014} your next treasure is here.",
    ),
    ("heroCta", "Shop now"),
    ("shopByCategory", "Shop by category"),
    ("shopByCategorySub", "Browse our collector categories"),
    ("featuredCollection", "Featured collection"),
    ("recommendedProducts", "Recommended for you"),
    ("viewAllCollections", "View all collections"),
    ("shopCta", "Shop \u{2192}"),
    ("loading", "Loading..."),
    // --- Footer ---
    (
        "footerTagline",
        "Jose's Juguetes \u{2014} Collectibles, toys & more for every collector.",
    ),
    ("privacyPolicy", "Privacy Policy"),
    ("refundPolicy", "Refund Policy"),
    ("shippingPolicy", "Shipping Policy"),
    ("termsOfService", "Terms of Service"),
    // --- Search ---
    ("searchPlaceholder", "Search collectibles..."),
    ("searchButton", "Search"),
    ("viewAllResults", "View all results for"),
];
