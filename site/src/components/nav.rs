use leptos::prelude::*;

/// Brand shown in the header on every route.
pub const BRAND: &str = "Pension & ISA";

/// One in-page anchor in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

// Fragment targets are not defined anywhere on the site yet.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Contact", href: "#contact" },
];

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="logo">
                <h1>{BRAND}</h1>
            </div>
            <ul class="nav-links">
                {NAV_LINKS
                    .into_iter()
                    .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </nav>
    }
}
