//! Task Manager Component
//!
//! Draft input, filter bar and the task list. Tasks come from and go to
//! local storage; the draft and filter live only while mounted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Button, ButtonVariant, Card, TaskRow};
use crate::models::TaskId;
use crate::storage::BrowserStorage;
use crate::store::{store_apply, TaskState, TaskStateStoreFields};
use crate::tasks::{filter_tasks, TaskAction, TaskCounts, TaskFilter};

#[component]
pub fn TaskManager() -> impl IntoView {
    let store = Store::new(TaskState::load(&BrowserStorage));
    let (draft, set_draft) = signal(String::new());
    let (filter, set_filter) = signal(TaskFilter::All);

    let counts = Memo::new(move |_| TaskCounts::of(&store.tasks().read()));
    let visible = Memo::new(move |_| filter_tasks(&store.tasks().read(), filter.get()));

    let add_task = move || {
        let text = draft.get_untracked();
        if store_apply(&store, &BrowserStorage, TaskAction::Add(text)) {
            set_draft.set(String::new());
        }
    };
    let toggle_task = move |id: TaskId| {
        store_apply(&store, &BrowserStorage, TaskAction::Toggle(id));
    };
    let delete_task = move |id: TaskId| {
        store_apply(&store, &BrowserStorage, TaskAction::Delete(id));
    };

    view! {
        <Card class="task-manager">
            <h2 class="section-title">"My Tasks"</h2>

            <div class="task-input-row">
                <input
                    type="text"
                    class="text-input"
                    placeholder="Add a new task..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            add_task();
                        }
                    }
                />
                <Button on_click=add_task>"Add Task"</Button>
            </div>

            <div class="filter-bar">
                {TaskFilter::ALL.into_iter().map(move |f| view! {
                    <Button
                        variant=Signal::derive(move || ButtonVariant::selected(filter.get() == f))
                        class="flex-1"
                        on_click=move || set_filter.set(f)
                    >
                        {move || format!("{} ({})", f.label(), counts.get().get(f))}
                    </Button>
                }).collect_view()}
            </div>

            <div class="task-list">
                <Show
                    when=move || visible.with(|tasks| !tasks.is_empty())
                    fallback=|| view! { <p class="empty-state">"No tasks found. Add one above!"</p> }
                >
                    <For
                        each=move || visible.get()
                        key=|task| (task.id, task.completed)
                        children=move |task| view! {
                            <TaskRow task=task on_toggle=toggle_task on_delete=delete_task />
                        }
                    />
                </Show>
            </div>
        </Card>
    }
}
