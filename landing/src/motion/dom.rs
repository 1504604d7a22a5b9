//! Browser bindings for the motion wrappers.
//!
//! On wasm32 these hooks wire Leptos signals to `requestAnimationFrame`
//! and to window `scroll` / `resize` events. On other targets they return
//! static signals, so the page renders to a string in its pre-mount state.

use leptos::html::Div;
use leptos::prelude::*;

/// Flips to `true` two animation frames after mount.
///
/// A single frame is not enough: its callback runs before the first style
/// flush, so the browser would coalesce the initial and final styles and
/// skip the transition. The second frame runs after the initial style has
/// been committed.
#[cfg(target_arch = "wasm32")]
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || {
            request_animation_frame(move || set_mounted.set(true));
        });
    });
    mounted
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_mounted() -> ReadSignal<bool> {
    signal(false).0
}

/// Scroll progress of `target` through the viewport, in [0, 1].
///
/// Re-measured on every window scroll and resize; listeners are removed
/// when the owning component is disposed.
#[cfg(target_arch = "wasm32")]
pub fn use_scroll_progress(target: NodeRef<Div>) -> ReadSignal<f64> {
    use crate::error::LandingError;

    let (progress, set_progress) = signal(0.0);

    let update = move || match measure(target) {
        Ok(p) => set_progress.set(p),
        Err(LandingError::Detached) => {}
        Err(err) => tracing::warn!(%err, "scroll progress not updated"),
    };

    // First measurement once the element is attached.
    Effect::new(move |_| {
        if target.get().is_some() {
            update();
        }
    });

    let on_scroll = window_event_listener(leptos::ev::scroll, move |_| update());
    let on_resize = window_event_listener(leptos::ev::resize, move |_| update());
    on_cleanup(move || {
        tracing::debug!("removing scroll listeners");
        on_scroll.remove();
        on_resize.remove();
    });

    progress
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_scroll_progress(_target: NodeRef<Div>) -> ReadSignal<f64> {
    signal(0.0).0
}

#[cfg(target_arch = "wasm32")]
fn measure(target: NodeRef<Div>) -> crate::error::Result<f64> {
    use crate::error::LandingError;
    use wasm_bindgen::JsValue;

    let element = target.get_untracked().ok_or(LandingError::Detached)?;
    let window = web_sys::window().ok_or(LandingError::NoWindow)?;
    let viewport_height = window
        .inner_height()
        .ok()
        .as_ref()
        .and_then(JsValue::as_f64)
        .ok_or(LandingError::ViewportHeight)?;

    let rect = element.get_bounding_client_rect();
    Ok(super::scroll_progress(
        rect.top(),
        rect.height(),
        viewport_height,
    ))
}
