//! Localized labels for well-known menu destinations.

use crate::i18n::Translator;
use tracing::trace;

/// One label rule: paths accepted by `matches` get the copy under `key`.
pub struct LabelRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub key: &'static str,
}

/// Evaluated in order; the first match wins.
pub const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        name: "blog",
        matches: |p| p.contains("/blogs/"),
        key: "navBlog",
    },
    LabelRule {
        name: "policies",
        matches: |p| p.contains("/policies"),
        key: "navPolicies",
    },
    LabelRule {
        name: "about",
        matches: |p| p == "/pages/about",
        key: "navAbout",
    },
    LabelRule {
        name: "all-collections",
        matches: |p| p == "/collections",
        key: "navCollections",
    },
];

/// The first rule matching `path`, if any.
pub fn matching_rule(path: &str) -> Option<&'static LabelRule> {
    LABEL_RULES.iter().find(|rule| (rule.matches)(path))
}

/// Label for a menu item: localized for well-known paths, else the raw
/// title from the content system, untouched.
pub fn resolve_menu_label<'a>(path: &str, title: &'a str, tr: Translator) -> &'a str {
    match matching_rule(path) {
        Some(rule) => {
            trace!("nav: {path} labeled by rule '{}'", rule.name);
            tr.t(rule.key)
        }
        None => title,
    }
}
