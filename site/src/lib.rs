// Pension & ISA site, Leptos 0.8 edition
// Built by the Pension & ISA Web Team (c)2025

//! # pension-site
//!
//! Marketing site for a workplace pension and ISA savings product, built
//! from [Leptos](https://leptos.dev/) components.
//!
//! The same component tree serves two builds:
//!
//! - **Browser** (`csr` feature) - [`App`] mounts under `leptos_router`, which
//!   picks the page from the location bar on every navigation.
//! - **Static** (`ssr` feature, default) - [`render_document`] renders a
//!   page to a complete HTML string and [`export::export_site`] writes one
//!   document per route for hosting without a server.
//!
//! ## Routes
//!
//! | Path          | Renders                              |
//! |---------------|--------------------------------------|
//! | `/`           | Hero followed by the feature grid    |
//! | `/features`   | Feature grid alone                   |
//! | anything else | `404 - Page Not Found`               |
//!
//! The navigation header sits outside the routed region and is identical on
//! every page.
//!
//! ## Quick Start
//!
//! ```rust
//! use pension_site::{render_path, SiteConfig};
//!
//! let html = render_path("/features", &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("ISA Management"));
//! ```

mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod styles;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod export;

pub use app::App;
pub use routes::Page;

#[cfg(feature = "ssr")]
pub use config::SiteConfig;
#[cfg(feature = "ssr")]
pub use error::{Result, SiteError};

#[cfg(feature = "ssr")]
use components::{Shell, SiteDocument};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Renders the application frame (header plus routed page) for a path.
///
/// This is the markup the browser build produces inside `<body>`.
#[cfg(feature = "ssr")]
pub fn render_page(path: &str) -> String {
    let page = Page::resolve(path);
    view! { <Shell page=page /> }.to_html()
}

/// Renders a complete HTML document for a resolved page.
#[cfg(feature = "ssr")]
pub fn render_document(page: Page, config: &SiteConfig) -> String {
    let doc = view! {
        <SiteDocument
            page=page
            title=config.title.clone()
            lang=config.lang.clone()
            stylesheet=config.stylesheet()
        />
    };

    // to_html() emits the element tree only
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Resolves `path` through the route table and renders its document.
#[cfg(feature = "ssr")]
pub fn render_path(path: &str, config: &SiteConfig) -> String {
    render_document(Page::resolve(path), config)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_document_shell() {
        let html = render_path("/", &SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains("<title>Pension &amp; ISA</title>"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn document_title_follows_page() {
        let config = SiteConfig {
            title: "Acme Savings".into(),
            ..SiteConfig::default()
        };

        assert!(render_path("/features", &config).contains("<title>Features | Acme Savings</title>"));
        assert!(render_path("/nope", &config).contains("<title>Page Not Found | Acme Savings</title>"));
    }

    #[test]
    fn page_fragment_is_embedded_in_document() {
        let fragment = render_page("/features");
        let document = render_path("/features", &SiteConfig::default());
        assert!(document.contains(&fragment));
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = SiteConfig::default();
        for path in ["/", "/features", "/unknown-x"] {
            assert_eq!(render_path(path, &config), render_path(path, &config));
        }
    }
}
