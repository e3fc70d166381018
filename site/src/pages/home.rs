// Home page - hero above the feature grid
use crate::components::{Features, Hero};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero />
            <Features />
        </div>
    }
}
