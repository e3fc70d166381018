//! Root document component - the complete HTML page for one route.

use super::Shell;
use crate::routes::Page;
use crate::styles::{SITE_CSS, STYLESHEET_FILE};
use leptos::prelude::*;

/// How a document pulls in the site stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stylesheet {
    /// `<style>` block in every document.
    #[default]
    Inline,
    /// `<link>` to the shared file at the site root.
    Linked,
}

/// The complete HTML document for a page.
#[component]
pub fn SiteDocument(
    page: Page,
    /// Site name; the page title is derived from it
    #[prop(into)]
    title: String,
    /// Value of the `lang` attribute on `<html>`
    #[prop(into, default = "en".to_string())]
    lang: String,
    #[prop(default = Stylesheet::Inline)] stylesheet: Stylesheet,
) -> impl IntoView {
    let stylesheet = match stylesheet {
        Stylesheet::Inline => view! { <style>{SITE_CSS}</style> }.into_any(),
        Stylesheet::Linked => {
            let href = format!("/{STYLESHEET_FILE}");
            view! { <link rel="stylesheet" href=href /> }.into_any()
        }
    };

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{page.title(&title)}</title>
                {stylesheet}
            </head>
            <body>
                <Shell page=page />
            </body>
        </html>
    }
}
