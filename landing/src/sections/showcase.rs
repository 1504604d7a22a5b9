use super::{Button, Parallax, Reveal};
use crate::config::SHOWCASE_IMAGE;
use crate::motion::ParallaxEffect;
use leptos::prelude::*;

#[component]
pub fn Showcase() -> impl IntoView {
    view! {
        <section id="showcase" class="section">
            <Reveal>
                <h2 class="section-title">"Showcase"</h2>
            </Reveal>
            <div class="showcase-grid">
                <Parallax effect=ParallaxEffect::Speed(5.0)>
                    <img class="showcase-image" src=SHOWCASE_IMAGE alt="NFT Reward Bot in action" />
                </Parallax>
                <Parallax effect=ParallaxEffect::Speed(-5.0)>
                    <div class="showcase-panel">
                        <h3 class="showcase-title">"Engage Your Community"</h3>
                        <p class="card-description">
                            "See how the NFT Reward Bot transforms your Discord server into a thriving, "
                            "gamified community. Boost engagement, reward participation, and create "
                            "a sense of achievement among your members."
                        </p>
                        <Button>"Learn More"</Button>
                    </div>
                </Parallax>
            </div>
        </section>
    }
}
