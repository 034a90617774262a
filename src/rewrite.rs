//! Domain and route normalization for extracted fragments.
//!
//! Both passes are literal substring replacement, exactly like the legacy
//! migration: no URL parsing, no HTML parsing. Applying the rewriter to
//! already-canonical content is a no-op.

use crate::registry::RouteRule;

/// Known spellings of the legacy domain.
///
/// Longer variants come first so the protocol-relative and bare-domain
/// passes never clip a longer match (`//www.sowads.com` is a substring of
/// `//www.sowads.com.br`).
const LEGACY_DOMAINS: [&str; 12] = [
    "https://www.sowads.com.br",
    "http://www.sowads.com.br",
    "https://sowads.com.br",
    "http://sowads.com.br",
    "https://www.sowads.com",
    "http://www.sowads.com",
    "https://sowads.com",
    "http://sowads.com",
    "//www.sowads.com.br",
    "//sowads.com.br",
    "//www.sowads.com",
    "//sowads.com",
];

/// Rewrites legacy domains and legacy routes to the canonical deployment.
pub struct Rewriter<'a> {
    /// Canonical base URL, trailing slash stripped.
    base: String,
    routes: &'a [RouteRule],
}

impl<'a> Rewriter<'a> {
    pub fn new(site_url: &str, routes: &'a [RouteRule]) -> Self {
        Self {
            base: site_url.trim_end_matches('/').to_string(),
            routes,
        }
    }

    /// Canonical base URL without trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Apply domain normalization, then route normalization.
    pub fn rewrite(&self, fragment: &str) -> String {
        let content = self.rewrite_domains(fragment);
        self.rewrite_routes(&content)
    }

    /// Replace every legacy domain spelling with the canonical base.
    fn rewrite_domains(&self, content: &str) -> String {
        let mut content = content.to_string();
        for domain in LEGACY_DOMAINS {
            content = content.replace(domain, &self.base);
        }
        content
    }

    /// Normalize legacy `*.html` routes in `href` and `action` attributes.
    fn rewrite_routes(&self, content: &str) -> String {
        let mut content = content.to_string();
        for rule in self.routes {
            let relative = rule.legacy.trim_start_matches('/');
            let pairs = [
                (
                    format!("href=\"{}\"", rule.legacy),
                    format!("href=\"{}\"", rule.canonical),
                ),
                (
                    format!("href=\"./{relative}\""),
                    format!("href=\"{}\"", rule.canonical),
                ),
                (
                    format!("href=\"{}{}\"", self.base, rule.legacy),
                    format!("href=\"{}{}\"", self.base, rule.canonical),
                ),
                (
                    format!("action=\"{}\"", rule.legacy),
                    format!("action=\"{}\"", rule.canonical),
                ),
                (
                    format!("action=\"{}{}\"", self.base, rule.legacy),
                    format!("action=\"{}{}\"", self.base, rule.canonical),
                ),
            ];
            for (from, to) in &pairs {
                content = content.replace(from, to);
            }
        }
        content
    }
}
