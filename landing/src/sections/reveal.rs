use crate::config::{ENTRANCE_OFFSET_PX, REVEAL_DURATION_SECS};
use crate::motion::dom::{use_mounted, use_scroll_progress};
use crate::motion::{Entrance, RevealFrame, Transition};
use leptos::html::Div;
use leptos::prelude::*;

/// Slides its children in on mount, then fades and scales them with
/// scroll: fully visible when centered in the viewport, faded toward
/// either edge.
///
/// The outer element carries the one-shot entrance transition; the inner
/// one carries the scroll frame, which must not be eased.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let mounted = use_mounted();
    let progress = use_scroll_progress(target);
    let entrance = Entrance::new(
        ENTRANCE_OFFSET_PX,
        Transition::new(REVEAL_DURATION_SECS, 0.0),
    );

    view! {
        <div class="reveal" node_ref=target style=move || entrance.style(mounted.get())>
            <div class="reveal-frame" style=move || RevealFrame::at(progress.get()).style()>
                {children()}
            </div>
        </div>
    }
}
