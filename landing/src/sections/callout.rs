use super::{Button, ButtonVariant, Parallax};
use crate::motion::ParallaxEffect;
use leptos::prelude::*;

#[component]
pub fn Callout() -> impl IntoView {
    view! {
        <Parallax effect=ParallaxEffect::Speed(-10.0) class="section">
            <div class="callout">
                <h2 class="callout-title">"Powered by Gaianet"</h2>
                <p class="callout-text">
                    "Leverage the power of decentralized data storage and secure transactions "
                    "with Gaianet integration."
                </p>
                <Button variant=ButtonVariant::Secondary>"Learn More"</Button>
            </div>
        </Parallax>
    }
}
