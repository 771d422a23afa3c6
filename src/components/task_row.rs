//! Task Row Component

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::models::{Task, TaskId};

/// One task: checkbox, text and delete button
#[component]
pub fn TaskRow(
    task: Task,
    #[prop(into)] on_toggle: Callback<TaskId>,
    #[prop(into)] on_delete: Callback<TaskId>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;

    view! {
        <div class="task-row">
            <input
                type="checkbox"
                class="task-check"
                prop:checked=completed
                on:change=move |_| on_toggle.run(id)
            />
            <span class=if completed { "task-text completed" } else { "task-text" }>
                {task.text}
            </span>
            <Button
                variant=ButtonVariant::Danger
                class="btn-small"
                on_click=move || on_delete.run(id)
            >
                "Delete"
            </Button>
        </div>
    }
}
