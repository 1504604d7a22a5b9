// NFT Reward Bot landing page - Leptos 0.8 CSR entry point

use leptos::prelude::*;
use nft_reward_landing::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(|| view! { <App /> });
}
