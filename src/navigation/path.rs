//! Menu URL normalization: absolute own-site URLs become site-relative paths.

use storefront_core::config::DomainMatching;
use url::Url;

/// Base that rooted and protocol-relative menu URLs are resolved against.
const RELATIVE_BASE: &str = "https://relative.invalid/";

/// Domains that identify a menu URL as pointing at this storefront.
#[derive(Debug, Clone)]
pub struct KnownDomains {
    domains: Vec<String>,
    matching: DomainMatching,
}

impl KnownDomains {
    /// Empty entries are dropped; they would otherwise match every URL.
    pub fn new<I, S>(domains: I, matching: DomainMatching) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| {
                    let d: String = d.into();
                    d.trim().to_string()
                })
                .filter(|d| !d.is_empty())
                .collect(),
            matching,
        }
    }

    /// Whether `url` points at one of our own domains.
    pub fn matches(&self, url: &str) -> bool {
        match self.matching {
            DomainMatching::Substring => self.domains.iter().any(|d| url.contains(d.as_str())),
            DomainMatching::Host => {
                let Some(host) = parse_menu_url(url).and_then(|u| u.host_str().map(str::to_lowercase))
                else {
                    return false;
                };
                self.domains
                    .iter()
                    .filter_map(|d| domain_host(d))
                    .any(|d| host == d || host.ends_with(&format!(".{d}")))
            }
        }
    }
}

/// Parse an absolute URL, or resolve a rooted one (`/path`, `//host/path`)
/// against a placeholder base.
fn parse_menu_url(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(_) if url.starts_with('/') => Url::parse(RELATIVE_BASE).ok()?.join(url).ok(),
        Err(_) => None,
    }
}

/// Host part of a configured domain, which may be a bare host or a full URL.
fn domain_host(domain: &str) -> Option<String> {
    if domain.contains("://") {
        Url::parse(domain).ok()?.host_str().map(str::to_lowercase)
    } else {
        let host = domain.split('/').next().unwrap_or_default();
        (!host.is_empty()).then(|| host.to_lowercase())
    }
}

/// Resolve a menu item URL to a site-relative path.
///
/// Returns `None` when the item is not navigable (no URL, or an own-site
/// URL that is neither absolute nor rooted). Protocol-relative own-site
/// URLs reduce to their path like absolute ones.
pub fn normalize_menu_path(url: Option<&str>, known: &KnownDomains) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    let raw = if known.matches(url) {
        parse_menu_url(url)?.path().to_string()
    } else {
        url.to_string()
    };
    Some(strip_trailing_slash(&raw))
}

/// Drop exactly one trailing slash; an empty path becomes `/`.
fn strip_trailing_slash(path: &str) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
