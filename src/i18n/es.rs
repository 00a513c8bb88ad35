//! Spanish copy. Keys missing here fall back to English.

pub(super) const ES: &[(&str, &str)] = &[
    // --- Brand ---
    ("brandName", "Jose's Juguetes"),
    ("brandTagline", "Colecciona \u{2022} Puja \u{2022} Compra"),
    ("brandTaglineShort", "Jose's Juguetes \u{2014} Coleccionables y m\u{e1}s"),
    // --- Nav ---
    ("navHome", "Inicio"),
    ("navCollections", "Todas las colecciones"),
    ("navCategories", "Comprar por categor\u{ed}a"),
    ("navPokemon", "Pok\u{e9}mon"),
    ("navStarWars", "Star Wars"),
    ("navTradingCards", "Cartas coleccionables"),
    ("navPopFigures", "Figuras POP!"),
    ("navActionFigures", "Figuras de acci\u{f3}n"),
    ("navHotWheels", "Hot Wheels"),
    ("navBlog", "Blog"),
    ("navPolicies", "Pol\u{ed}ticas"),
    ("navAbout", "Nosotros"),
    ("navAccount", "Cuenta"),
    ("navSignIn", "Entrar"),
    ("navCart", "Carrito"),
    ("navSearch", "Buscar"),
    // --- Home ---
    ("heroHeadline", "Coleccionables que te encantar\u{e1}n"),
    (
        "heroSubhead",
        "Encuentra juguetes raros, figuras POP!, cartas y m\u{e1}s. Puja o compra \u{2014} tu pr\u{f3}ximo tesoro est\u{e1} aqu\u{ed}.",
    ),
    ("heroCta", "Comprar ahora"),
    ("shopByCategory", "Comprar por categor\u{ed}a"),
    ("shopByCategorySub", "Explora nuestras categor\u{ed}as para coleccionistas"),
    ("featuredCollection", "Colecci\u{f3}n destacada"),
    ("recommendedProducts", "Recomendados para ti"),
    ("viewAllCollections", "Ver todas las colecciones"),
    ("shopCta", "Comprar \u{2192}"),
    ("loading", "Cargando..."),
    // --- Footer ---
    (
        "footerTagline",
        "Jose's Juguetes \u{2014} Coleccionables, juguetes y m\u{e1}s para cada coleccionista.",
    ),
    ("privacyPolicy", "Pol\u{ed}tica de privacidad"),
    ("refundPolicy", "Pol\u{ed}tica de reembolso"),
    ("shippingPolicy", "Pol\u{ed}tica de env\u{ed}os"),
    ("termsOfService", "T\u{e9}rminos de servicio"),
    // --- Search ---
    ("searchPlaceholder", "Buscar coleccionables..."),
    ("searchButton", "Buscar"),
    ("viewAllResults", "Ver todos los resultados de"),
];
