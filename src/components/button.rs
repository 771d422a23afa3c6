//! Button Component
//!
//! Styled button with primary / secondary / danger variants.

use leptos::prelude::*;

/// Visual variant of a [`Button`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
        }
    }

    /// Primary when `active`, secondary otherwise
    pub fn selected(active: bool) -> Self {
        if active {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Secondary
        }
    }
}

/// Stateless styled button
///
/// # Arguments
/// * `variant` - Visual variant, may change reactively
/// * `on_click` - Click handler
/// * `class` - Extra CSS classes appended after the variant
/// * `disabled` - Disables the button while true
#[component]
pub fn Button(
    #[prop(into)] on_click: Callback<()>,
    #[prop(into, default = Signal::stored(ButtonVariant::Primary))] variant: Signal<ButtonVariant>,
    #[prop(into, optional)] class: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || format!("btn {} {}", variant.get().class(), class).trim_end().to_string()
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
