use super::{ButtonSize, ButtonVariant, Parallax, Staggered, button_class};
use crate::config::{DISCORD_AUTHORIZE_URL, TAGLINE, TITLE};
use crate::motion::ParallaxEffect;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let cta_class = format!(
        "{} hero-cta",
        button_class(ButtonVariant::Primary, ButtonSize::Large)
    );

    view! {
        <header class="hero">
            <Parallax effect=ParallaxEffect::TranslatePercent(-20.0, 20.0) class="hero-backdrop">
                <div class="hero-gradient"></div>
            </Parallax>
            <div class="hero-content">
                <Staggered index=0>
                    <h1 class="hero-title">{TITLE}</h1>
                </Staggered>
                <Staggered index=1>
                    <p class="hero-tagline">{TAGLINE}</p>
                </Staggered>
                <Staggered index=2>
                    <a
                        id="add-to-discord"
                        href=DISCORD_AUTHORIZE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=cta_class
                    >
                        "Add to Discord"
                    </a>
                </Staggered>
            </div>
        </header>
    }
}
