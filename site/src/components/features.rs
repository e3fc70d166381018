use leptos::prelude::*;

/// A single product highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Feature grid contents, in display order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Pension Planning",
        description: "Expert guidance and tools to help you plan for a comfortable retirement with confidence.",
    },
    Feature {
        title: "ISA Management",
        description: "Maximize your tax-free savings with our easy-to-use ISA management platform.",
    },
    Feature {
        title: "Smart Investing",
        description: "Access sophisticated investment strategies tailored to your goals and risk tolerance.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="features-grid">
                {FEATURES
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <FeatureCard title=feature.title description=feature.description />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_three_cards_in_order() {
        let html = view! { <Features /> }.to_html();

        assert_eq!(html.matches(r#"class="feature-card""#).count(), 3);
        let positions: Vec<usize> = FEATURES
            .iter()
            .map(|feature| html.find(feature.title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn card_pairs_title_with_description() {
        let html = view! {
            <FeatureCard title="ISA Management" description="Tax-free savings" />
        }
        .to_html();

        assert_eq!(
            html,
            r#"<div class="feature-card"><h3>ISA Management</h3><p>Tax-free savings</p></div>"#
        );
    }
}
