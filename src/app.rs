//! TaskMaster App
//!
//! Shell: navbar, view switch, active feature, footer.

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Footer, Navbar, TaskManager, UserDirectory};
use crate::storage::BrowserStorage;
use crate::theme::Theme;

/// Which feature the shell shows.
///
/// Only the active feature is mounted: switching away drops its draft,
/// filter, search and page; tasks reload from storage and the directory
/// refetches when shown again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Tasks,
    Users,
}

impl ActiveView {
    pub const ALL: [ActiveView; 2] = [ActiveView::Tasks, ActiveView::Users];

    /// Label in the navbar
    pub fn nav_label(self) -> &'static str {
        match self {
            ActiveView::Tasks => "Tasks",
            ActiveView::Users => "Users",
        }
    }

    /// Label on the main view switch
    pub fn switch_label(self) -> &'static str {
        match self {
            ActiveView::Tasks => "Task Manager",
            ActiveView::Users => "User Directory",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let theme = Theme::load(&BrowserStorage);
    let (current_view, set_current_view) = signal(ActiveView::default());
    // Re-selecting the shown view must not remount it
    let shown_view = Memo::new(move |_| current_view.get());

    // Keep <html class="dark"> in sync with the theme
    Effect::new(move |_| Theme::apply_to_document(theme.is_dark()));

    Effect::new(move |_| log::debug!("showing {:?}", shown_view.get()));

    view! {
        <div class="app-layout">
            <Navbar theme=theme current_view=current_view set_current_view=set_current_view />

            <main class="main-content">
                <div class="view-switch">
                    {ActiveView::ALL.into_iter().map(move |v| view! {
                        <Button
                            variant=Signal::derive(move || ButtonVariant::selected(current_view.get() == v))
                            on_click=move || set_current_view.set(v)
                        >
                            {v.switch_label()}
                        </Button>
                    }).collect_view()}
                </div>

                {move || match shown_view.get() {
                    ActiveView::Tasks => view! { <TaskManager /> }.into_any(),
                    ActiveView::Users => view! { <UserDirectory /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
