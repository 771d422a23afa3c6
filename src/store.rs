//! Task Store
//!
//! Uses Leptos reactive_stores for the task collection. Every mutation goes
//! through `store_apply`, which re-persists the whole collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::TASKS_KEY;
use crate::models::Task;
use crate::storage::{self, KeyValueStore};
use crate::tasks::{self, TaskAction};

/// Task list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// All tasks, insertion order
    pub tasks: Vec<Task>,
}

impl TaskState {
    /// Rehydrate from storage; an absent or corrupt entry yields an empty list
    pub fn load(storage: &impl KeyValueStore) -> Self {
        Self {
            tasks: storage::read(storage, TASKS_KEY, Vec::new()),
        }
    }
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

/// Apply `action` to the store and persist if anything changed
pub fn store_apply(store: &TaskStore, storage: &impl KeyValueStore, action: TaskAction) -> bool {
    let field = store.tasks();
    let mut list = field.write();
    let changed = tasks::apply(&mut list, action.clone(), now_millis());
    if changed {
        log::debug!("{:?} -> {} tasks", action, list.len());
        storage::write(storage, TASKS_KEY, &*list);
    }
    changed
}

fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_load_empty_storage() {
        let storage = MemoryStorage::new();
        assert!(TaskState::load(&storage).tasks.is_empty());
    }

    #[test]
    fn test_load_existing_tasks_in_order() {
        let storage = MemoryStorage::new();
        storage.put_raw(
            TASKS_KEY,
            r#"[{"id":2,"text":"second","completed":true},{"id":1,"text":"first","completed":false}]"#,
        );
        let state = TaskState::load(&storage);
        let ids: Vec<_> = state.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(state.tasks[0].completed);
    }

    #[test]
    fn test_mutations_survive_reload() {
        let storage = MemoryStorage::new();
        let mut state = TaskState::load(&storage);
        tasks::apply(&mut state.tasks, TaskAction::Add("Buy milk".into()), 1);
        tasks::apply(&mut state.tasks, TaskAction::Add("Call Bob".into()), 2);
        tasks::apply(&mut state.tasks, TaskAction::Toggle(1), 3);
        storage::write(&storage, TASKS_KEY, &state.tasks);

        assert_eq!(TaskState::load(&storage).tasks, state.tasks);
    }

    #[test]
    fn test_store_apply_persists_changes() {
        let owner = Owner::new();
        owner.with(|| {
            let storage = MemoryStorage::new();
            let store = Store::new(TaskState::load(&storage));

            assert!(store_apply(&store, &storage, TaskAction::Add("Buy milk".into())));
            let persisted: Vec<Task> = storage::read(&storage, TASKS_KEY, Vec::new());
            assert_eq!(persisted.len(), 1);
            assert_eq!(persisted[0].text, "Buy milk");

            let id = persisted[0].id;
            assert!(store_apply(&store, &storage, TaskAction::Delete(id)));
            assert_eq!(storage.raw(TASKS_KEY).as_deref(), Some("[]"));
        });
    }

    #[test]
    fn test_store_apply_noop_skips_write() {
        let owner = Owner::new();
        owner.with(|| {
            let storage = MemoryStorage::new();
            let store = Store::new(TaskState::default());

            assert!(!store_apply(&store, &storage, TaskAction::Add("   ".into())));
            assert!(!store_apply(&store, &storage, TaskAction::Toggle(42)));
            assert_eq!(storage.raw(TASKS_KEY), None);
        });
    }

    #[test]
    fn test_store_apply_survives_rejected_write() {
        let owner = Owner::new();
        owner.with(|| {
            let storage = MemoryStorage::new();
            storage.reject_writes(true);
            let store = Store::new(TaskState::default());

            assert!(store_apply(&store, &storage, TaskAction::Add("kept in memory".into())));
            assert_eq!(store.tasks().read().len(), 1);
            assert_eq!(storage.raw(TASKS_KEY), None);
        });
    }
}
