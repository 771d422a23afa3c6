//! Navbar Component
//!
//! Title, view links and the dark mode toggle.

use leptos::prelude::*;

use crate::app::ActiveView;
use crate::config::APP_NAME;
use crate::storage::BrowserStorage;
use crate::theme::Theme;

#[component]
pub fn Navbar(
    theme: Theme,
    current_view: ReadSignal<ActiveView>,
    set_current_view: WriteSignal<ActiveView>,
) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <h1 class="navbar-title">{APP_NAME}</h1>
                <div class="navbar-actions">
                    {ActiveView::ALL.into_iter().map(move |v| view! {
                        <button
                            class=move || if current_view.get() == v { "nav-link active" } else { "nav-link" }
                            on:click=move |_| set_current_view.set(v)
                        >
                            {v.nav_label()}
                        </button>
                    }).collect_view()}
                    <button
                        class="theme-toggle"
                        aria-label="Toggle dark mode"
                        on:click=move |_| theme.toggle(&BrowserStorage)
                    >
                        {move || if theme.is_dark() { "🌞" } else { "🌙" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
