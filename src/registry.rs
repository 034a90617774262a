//! Static migration tables.
//!
//! Which legacy file feeds which destination slug, and how legacy `*.html`
//! routes map to their canonical extension-less form. Both tables are fixed
//! for the one-time migration and are threaded into the driver as
//! parameters, never read as ambient state.

/// A destination page slug paired with the legacy file that feeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMapping {
    pub slug: &'static str,
    pub source_file: &'static str,
}

/// A legacy route and the canonical route that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub legacy: &'static str,
    pub canonical: &'static str,
}

/// Every page carried over from the legacy site.
pub const PAGES: [PageMapping; 7] = [
    PageMapping { slug: "home-squarespace", source_file: "index.html" },
    PageMapping { slug: "redesefranquias", source_file: "redesefranquias.html" },
    PageMapping { slug: "sowads-orbit-ai", source_file: "sowads-orbit-ai.html" },
    PageMapping { slug: "termos-de-servico", source_file: "termos-de-servico.html" },
    PageMapping { slug: "politica-de-privacidade", source_file: "politica-de-privacidade.html" },
    PageMapping { slug: "data-request-policy", source_file: "data-request-policy.html" },
    PageMapping { slug: "cart", source_file: "cart.html" },
];

/// Internal route normalization table, one entry per migrated page.
pub const ROUTES: [RouteRule; 7] = [
    RouteRule { legacy: "/index.html", canonical: "/" },
    RouteRule { legacy: "/redesefranquias.html", canonical: "/redesefranquias/" },
    RouteRule { legacy: "/sowads-orbit-ai.html", canonical: "/sowads-orbit-ai/" },
    RouteRule { legacy: "/termos-de-servico.html", canonical: "/termos-de-servico/" },
    RouteRule { legacy: "/politica-de-privacidade.html", canonical: "/politica-de-privacidade/" },
    RouteRule { legacy: "/data-request-policy.html", canonical: "/data-request-policy/" },
    RouteRule { legacy: "/cart.html", canonical: "/cart/" },
];
