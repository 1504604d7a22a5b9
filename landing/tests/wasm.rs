//! Browser tests for the live motion hooks.
//!
//! Run with `wasm-pack test --headless --firefox landing` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use nft_reward_landing::sections::{EntranceController, Reveal, Staggered};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().expect("window")
}

/// Fresh container appended to `<body>`, scrolled back to the top.
fn host() -> HtmlElement {
    let window = window();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let document = window.document().expect("document");
    let host = document.create_element("div").expect("create host");
    document
        .body()
        .expect("body")
        .append_child(&host)
        .expect("append host");
    host.dyn_into::<HtmlElement>().expect("host is an HtmlElement")
}

fn find(host: &HtmlElement, selector: &str) -> Element {
    host.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} not rendered"))
}

fn style(element: &Element) -> String {
    element.get_attribute("style").unwrap_or_default()
}

fn opacity(style: &str) -> f64 {
    style
        .strip_prefix("opacity: ")
        .and_then(|rest| rest.split(';').next())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_else(|| panic!("no leading opacity in {style:?}"))
}

#[wasm_bindgen_test]
async fn reveal_frame_follows_window_scroll() {
    let host = host();
    let handle = mount_to(host.clone(), || {
        view! {
            <div style="height: 200vh;"></div>
            <Reveal>
                <p style="height: 100px; margin: 0;">"revealed"</p>
            </Reveal>
            <div style="height: 200vh;"></div>
        }
    });
    TimeoutFuture::new(50).await;

    let reveal = find(&host, ".reveal");
    let frame = find(&host, ".reveal-frame");
    let below_fold = style(&frame);
    assert!(
        below_fold.starts_with("opacity: 0.000;"),
        "below the fold: {below_fold}"
    );

    // Center the wrapper in the viewport.
    let window = window();
    let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).expect("viewport");
    let rect = reveal.get_bounding_client_rect();
    let scroll_y = window.scroll_y().unwrap_or_default();
    window.scroll_to_with_x_and_y(0.0, scroll_y + rect.top() - (viewport - rect.height()) / 2.0);
    TimeoutFuture::new(100).await;

    let centered = style(&frame);
    assert!(opacity(&centered) > 0.5, "centered: {centered}");
    assert!(!centered.contains("transition"), "frame is eased: {centered}");

    drop(handle);
    host.remove();
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn staggered_block_hides_until_after_first_frame() {
    let host = host();
    let handle = mount_to(host.clone(), || {
        provide_context(EntranceController::on_mount());
        view! {
            <Staggered index=0 class="block">
                <p>"staggered"</p>
            </Staggered>
        }
    });

    let block = find(&host, ".block");
    let initial = style(&block);
    assert_eq!(initial, "opacity: 0; transform: translateY(20px);");

    TimeoutFuture::new(100).await;
    let settled = style(&block);
    assert!(
        settled.starts_with("opacity: 1; transform: translateY(0px);"),
        "after mount: {settled}"
    );
    assert!(settled.contains("transition: opacity 0.30s ease-out 0.00s"));

    drop(handle);
    host.remove();
}
