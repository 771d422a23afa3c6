//! Pagination Bar Component
//!
//! Previous / "Page X of Y" / Next. Renders nothing for a single page.

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::directory::Pagination;

#[component]
pub fn PaginationBar(
    pager: ReadSignal<Pagination>,
    set_pager: WriteSignal<Pagination>,
    /// Number of records being paged
    #[prop(into)]
    count: Signal<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || pager.get().has_controls(count.get())>
            <div class="pagination">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || pager.get().is_first())
                    on_click=move || set_pager.update(|p| *p = p.prev())
                >
                    "Previous"
                </Button>
                <span class="page-indicator">
                    {move || {
                        let p = pager.get();
                        format!("Page {} of {}", p.page, p.total_pages(count.get()))
                    }}
                </span>
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || pager.get().is_last(count.get()))
                    on_click=move || set_pager.update(|p| *p = p.next(count.get_untracked()))
                >
                    "Next"
                </Button>
            </div>
        </Show>
    }
}
