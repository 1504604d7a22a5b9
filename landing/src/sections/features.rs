use super::{IconSvg, Reveal, Staggered};
use crate::content::{FEATURES, Feature};
use leptos::prelude::*;

/// Entrance index of the first card; hero blocks take 0..=2.
const FIRST_CARD_INDEX: usize = 3;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <Reveal>
                <h2 class="section-title">"Key Features"</h2>
            </Reveal>
            <div class="features-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| view! { <FeatureCard feature={*feature} index={FIRST_CARD_INDEX + i} /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    view! {
        <Staggered index=index class="feature-card">
            <IconSvg icon=feature.icon />
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-description">{feature.description}</p>
        </Staggered>
    }
}
