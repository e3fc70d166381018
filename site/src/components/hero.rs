use leptos::prelude::*;

pub const HEADLINE: &str = "Making workplace pensions and savings easy";
pub const SUBTEXT: &str = "Secure your future with smart investments";

/// Banner at the top of the home page.
///
/// The call-to-action button carries no handler; pressing it does nothing.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{HEADLINE}</h1>
            <p>{SUBTEXT}</p>
            <button class="cta-button">"Get Started"</button>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_headline_before_call_to_action() {
        let html = view! { <Hero /> }.to_html();

        let headline = html.find(HEADLINE).unwrap();
        let subtext = html.find(SUBTEXT).unwrap();
        let cta = html.find("Get Started").unwrap();
        assert!(headline < subtext && subtext < cta);
    }

    #[test]
    fn call_to_action_has_no_handler() {
        let html = view! { <Hero /> }.to_html();

        assert!(html.contains(r#"<button class="cta-button">"#));
        assert!(!html.contains("onclick"));
    }
}
