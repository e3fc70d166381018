// Application frame: header outside the routed region, one page inside it.
use super::Nav;
use crate::routes::Page;
use leptos::prelude::*;

/// Frame for an already-resolved page.
///
/// The browser build gets the same frame from [`crate::App`], where the
/// router supplies the path instead.
#[component]
pub fn Shell(page: Page) -> impl IntoView {
    view! {
        <div class="app">
            <Nav />
            <main>{page.view()}</main>
        </div>
    }
}
