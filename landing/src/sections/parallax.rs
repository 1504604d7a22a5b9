use crate::motion::ParallaxEffect;
use crate::motion::dom::use_scroll_progress;
use leptos::html::Div;
use leptos::prelude::*;

#[component]
pub fn Parallax(
    effect: ParallaxEffect,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let progress = use_scroll_progress(target);

    view! {
        <div
            class=class
            node_ref=target
            style=move || format!("transform: {}; will-change: transform;", effect.transform(progress.get()))
        >
            {children()}
        </div>
    }
}
