use crate::config::{BRAND, COPYRIGHT_YEAR};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let notice = format!("© {COPYRIGHT_YEAR} {BRAND}. All rights reserved.");
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{notice}</p>
            </div>
        </footer>
    }
}
