use crate::config::SHAPE_COUNT;
use crate::motion::scatter;
use leptos::prelude::*;

/// Floating circles behind all content. Reshuffled on every mount.
#[component]
pub fn BackgroundShapes() -> impl IntoView {
    let shapes = scatter(&mut rand::thread_rng(), SHAPE_COUNT);

    view! {
        <div class="background-shapes" aria-hidden="true">
            {shapes
                .into_iter()
                .map(|shape| view! { <div class="floating-shape" style=shape.style()></div> })
                .collect_view()}
        </div>
    }
}
