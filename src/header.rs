//! Header view model: brand link, desktop and mobile menus, and the
//! account / search / cart call-to-actions.

use serde::Serialize;
use storefront_core::menu::MenuItem;

use crate::i18n::Translator;
use crate::navigation::{build_navigation, KnownDomains, NavOptions, NavigationLink, Viewport};

/// Session facts the header reflects. `None` means still resolving.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionState {
    pub logged_in: Option<bool>,
    pub cart_quantity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub brand: NavigationLink,
    pub desktop_menu: Vec<NavigationLink>,
    pub mobile_menu: Vec<NavigationLink>,
    pub ctas: HeaderCtas,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCtas {
    pub account: NavigationLink,
    pub search_label: String,
    pub cart: CartBadge,
}

/// Cart toggle. `count` stays empty until the cart resolves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartBadge {
    pub path: String,
    pub label: String,
    pub count: Option<u32>,
}

/// Build the header for one render. The desktop menu is the one the
/// header shows inline; the mobile menu feeds the slide-out aside.
pub fn build_header(
    items: &[MenuItem],
    known: &KnownDomains,
    collector_nav: bool,
    session: SessionState,
    tr: Translator,
) -> HeaderView {
    let menu_for = |viewport| {
        build_navigation(
            items,
            known,
            NavOptions {
                viewport,
                collector_nav,
                translator: tr,
            },
        )
    };

    HeaderView {
        brand: NavigationLink::new("/", tr.t("brandName")),
        desktop_menu: menu_for(Viewport::Desktop),
        mobile_menu: menu_for(Viewport::Mobile),
        ctas: build_ctas(session, tr),
    }
}

fn build_ctas(session: SessionState, tr: Translator) -> HeaderCtas {
    // An unresolved or failed session check reads as signed out.
    let account_key = if session.logged_in.unwrap_or(false) {
        "navAccount"
    } else {
        "navSignIn"
    };
    HeaderCtas {
        account: NavigationLink::new("/account", tr.t(account_key)),
        search_label: tr.t("navSearch").to_string(),
        cart: CartBadge {
            path: "/cart".to_string(),
            label: tr.t("navCart").to_string(),
            count: session.cart_quantity,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::fallback_header_menu;
    use storefront_core::config::DomainMatching;
    use storefront_core::locale::LanguageCode;

    fn known() -> KnownDomains {
        KnownDomains::new(["myshopify.com"], DomainMatching::Substring)
    }

    #[test]
    fn test_header_spanish_signed_in() {
        let menu = fallback_header_menu();
        let header = build_header(
            &menu.items,
            &known(),
            true,
            SessionState {
                logged_in: Some(true),
                cart_quantity: Some(3),
            },
            Translator::new(LanguageCode::Es),
        );
        assert_eq!(header.brand, NavigationLink::new("/", "Jose's Juguetes"));
        assert_eq!(header.ctas.account.label, "Cuenta");
        assert_eq!(header.ctas.search_label, "Buscar");
        assert_eq!(header.ctas.cart.label, "Carrito");
        assert_eq!(header.ctas.cart.count, Some(3));
        assert_eq!(header.mobile_menu.len(), header.desktop_menu.len() + 1);
        assert_eq!(header.mobile_menu[0].label, "Inicio");
        assert_eq!(&header.mobile_menu[1..], &header.desktop_menu[..]);
    }

    #[test]
    fn test_unresolved_session_reads_signed_out() {
        let header = build_header(
            &[],
            &known(),
            false,
            SessionState::default(),
            Translator::new(LanguageCode::En),
        );
        assert_eq!(header.ctas.account, NavigationLink::new("/account", "Sign in"));
        assert_eq!(header.ctas.cart.count, None);
        assert!(header.desktop_menu.is_empty());
        assert_eq!(header.mobile_menu, vec![NavigationLink::new("/", "Home")]);
    }
}
