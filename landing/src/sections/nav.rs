use super::{Button, ButtonVariant};
use crate::config::BRAND;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner container">
                <span class="nav-brand">{BRAND}</span>
                <Button variant=ButtonVariant::Outline>"Get Started"</Button>
            </div>
        </nav>
    }
}
