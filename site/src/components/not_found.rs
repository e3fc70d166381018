use leptos::prelude::*;

pub const NOT_FOUND_TEXT: &str = "404 - Page Not Found";

/// Wildcard route view.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>{NOT_FOUND_TEXT}</h1>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_static_heading() {
        let html = view! { <NotFound /> }.to_html();
        assert_eq!(html, r#"<div class="not-found"><h1>404 - Page Not Found</h1></div>"#);
    }
}
