//! Footer Component

use leptos::prelude::*;

use crate::config::{APP_NAME, COPYRIGHT_YEAR};

const FOOTER_LINKS: &[&str] = &["About", "Contact", "Privacy"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-links">
                {FOOTER_LINKS.iter().map(|label| view! {
                    <a href="#" class="footer-link">{*label}</a>
                }).collect_view()}
            </div>
            <p class="footer-copy">
                {format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, APP_NAME)}
            </p>
        </footer>
    }
}
