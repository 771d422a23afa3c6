//! Card Component

use leptos::prelude::*;

/// Rounded, shadowed container
#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card {}", class).trim_end().to_string()>
            {children()}
        </div>
    }
}
