//! Route table for the site.
//!
//! | Path          | Page                     |
//! |---------------|--------------------------|
//! | `/`           | [`Page::Home`]           |
//! | `/features`   | [`Page::Features`]       |
//! | anything else | [`Page::NotFound`]       |
//!
//! Resolution is total: every input maps to exactly one page.

use crate::components::{Features, NotFound};
use crate::pages::HomePage;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Features,
    NotFound,
}

impl Page {
    /// Every page, in route-table order (wildcard last).
    pub const ALL: [Page; 3] = [Page::Home, Page::Features, Page::NotFound];

    /// Picks the page for a request path.
    ///
    /// Only the path component counts: query string and fragment are cut
    /// off. The remainder must equal a pattern exactly, so `/features/` and
    /// `/Features` are 404s.
    pub fn resolve(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        match path {
            "/" => Page::Home,
            "/features" => Page::Features,
            _ => Page::NotFound,
        }
    }

    /// Route pattern as written in the table; `None` for the wildcard.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::Features => Some("/features"),
            Page::NotFound => None,
        }
    }

    /// Pattern for display, with `*` standing in for the wildcard.
    pub fn pattern(self) -> &'static str {
        self.path().unwrap_or("*")
    }

    /// Document title; pages other than home prefix their own name.
    pub fn title(self, site_title: &str) -> String {
        match self {
            Page::Home => site_title.to_string(),
            Page::Features => format!("Features | {site_title}"),
            Page::NotFound => format!("Page Not Found | {site_title}"),
        }
    }

    /// Renders the page body (everything inside `<main>`).
    pub fn view(self) -> AnyView {
        match self {
            Page::Home => view! { <HomePage /> }.into_any(),
            Page::Features => view! { <Features /> }.into_any(),
            Page::NotFound => view! { <NotFound /> }.into_any(),
        }
    }
}
