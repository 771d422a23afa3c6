//! User Directory Component
//!
//! Fetches the user collection once on mount, then searches and pages
//! through that snapshot locally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Button, Card, PaginationBar, UserCard};
use crate::config::{USERS_ENDPOINT, USERS_PAGE_SIZE};
use crate::directory::{pager_after_search, search_users, FetchState, Pagination};
use crate::dom;

#[component]
pub fn UserDirectory(
    /// Users collection URL
    #[prop(default = USERS_ENDPOINT)]
    endpoint: &'static str,
    /// Users per page
    #[prop(default = USERS_PAGE_SIZE)]
    page_size: usize,
) -> impl IntoView {
    let (state, set_state) = signal(FetchState::Loading);
    let (search, set_search) = signal(String::new());
    let (pager, set_pager) = signal(Pagination::new(page_size));

    // One fetch per mount; search and paging never refetch
    Effect::new(move |_| {
        log::info!("fetching users from {}", endpoint);
        spawn_local(async move {
            let result = api::fetch_users(endpoint).await;
            match &result {
                Ok(users) => log::info!("loaded {} users", users.len()),
                Err(e) => log::error!("user fetch failed: {}", e),
            }
            set_state.set(FetchState::from_result(result));
        });
    });

    let filtered = Memo::new(move |_| {
        state.with(|s| search.with(|query| search_users(s.users(), query)))
    });
    let filtered_count = Signal::derive(move || filtered.with(|users| users.len()));
    let page_users = move || filtered.with(|users| pager.get().indexed_page(users));

    let on_search = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        let previous = search.get_untracked();
        set_pager.update(|p| *p = pager_after_search(*p, &previous, &query));
        set_search.set(query);
    };

    view! {
        <div class="user-directory">
            {move || match state.get() {
                FetchState::Loading => view! { <Spinner /> }.into_any(),
                FetchState::Failed(message) => view! { <FetchErrorCard message=message /> }.into_any(),
                FetchState::Loaded(_) => view! {
                    <h2 class="section-title">"User Directory"</h2>
                    <input
                        type="text"
                        class="text-input search-input"
                        placeholder="Search users by name or email..."
                        prop:value=move || search.get()
                        on:input=on_search
                    />
                    <div class="user-grid">
                        <For
                            each=page_users
                            key=|(index, user)| (*index, user.id)
                            children=|(_, user)| view! { <UserCard user=user /> }
                        />
                    </div>
                    <PaginationBar pager=pager set_pager=set_pager count=filtered_count />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}

/// Error message with a full-reload retry
#[component]
fn FetchErrorCard(message: String) -> impl IntoView {
    let retry = move || {
        if let Err(e) = dom::reload_page() {
            log::error!("reload failed: {}", e);
        }
    };

    view! {
        <Card class="error-card">
            <p class="error-text">{format!("Error: {}", message)}</p>
            <Button class="retry-btn" on_click=retry>"Retry"</Button>
        </Card>
    }
}
