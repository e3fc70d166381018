// Browser entry component: the router tracks the location bar, the page
// comes from the same table the static renderer uses.
use crate::components::Nav;
use crate::routes::Page;
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

/// Root component for the client-side build.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Nav />
                <main>
                    <RoutedPage />
                </main>
            </div>
        </Router>
    }
}

/// Re-resolves the page on every navigation.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    move || Page::resolve(&location.pathname.get()).view()
}
