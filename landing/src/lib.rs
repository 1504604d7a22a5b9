//! # nft-reward-landing
//!
//! Marketing page for the NFT Reward Bot, a Discord bot that hands out NFT
//! rewards to community members. Built with Leptos 0.8 and rendered
//! client-side; `trunk serve` from `landing/` runs it locally.
//!
//! ## Layout
//!
//! - [`sections`] - nav, hero, features, callout, how-it-works, showcase,
//!   footer, plus the motion wrappers they use
//! - [`motion`] - pure animation math and the DOM hooks feeding it
//! - [`content`] - feature and step copy
//! - [`config`] - brand, links and timing constants
//!
//! With the `ssr` feature, `render_page` produces the same page as a static
//! HTML string in its pre-mount state (`cargo test --features ssr` runs the
//! markup tests against it).

pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod sections;

use leptos::prelude::*;
use sections::*;

pub use error::LandingError;

#[component]
pub fn App() -> impl IntoView {
    provide_context(EntranceController::on_mount());

    view! {
        <div class="page">
            <BackgroundShapes />
            <Nav />
            <Hero />
            <main class="container content">
                <Features />
                <Callout />
                <HowItWorks />
                <Showcase />
            </main>
            <Footer />
        </div>
    }
}

/// Render the whole page to an HTML document.
///
/// Needs the `ssr` feature: a csr-only tachys cannot render attributes to
/// strings.
///
/// ```rust
/// let html = nft_reward_landing::render_page();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("Add to Discord"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page() -> String {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let body = owner.with(|| view! { <App /> }.to_html());

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\" /><title>{}</title></head><body>{}</body></html>",
        config::BRAND,
        body
    )
}
