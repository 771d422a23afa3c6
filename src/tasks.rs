//! Task List Logic
//!
//! Add / toggle / delete transitions and filter views over the task
//! collection. Pure functions; the reactive store wraps them and persists.

use crate::models::{Task, TaskId};

/// A change to the task collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Append a task from the draft text
    Add(String),
    /// Flip `completed`
    Toggle(TaskId),
    /// Remove
    Delete(TaskId),
}

/// Apply `action`; `now_ms` seeds the id of an added task.
///
/// Returns whether the collection changed. Blank drafts and unknown ids
/// are no-ops.
pub fn apply(tasks: &mut Vec<Task>, action: TaskAction, now_ms: u64) -> bool {
    match action {
        TaskAction::Add(text) => add_task(tasks, &text, now_ms).is_some(),
        TaskAction::Toggle(id) => toggle_task(tasks, id),
        TaskAction::Delete(id) => delete_task(tasks, id),
    }
}

/// Append a new open task unless `text` is blank. Text is kept as typed.
pub fn add_task(tasks: &mut Vec<Task>, text: &str, now_ms: u64) -> Option<TaskId> {
    if text.trim().is_empty() {
        return None;
    }
    let id = next_id(tasks, now_ms);
    tasks.push(Task::new(id, text));
    Some(id)
}

/// Creation timestamp, bumped past the largest id so ids stay unique
/// for adds within the same millisecond (or after a clock step back).
pub fn next_id(tasks: &[Task], now_ms: u64) -> TaskId {
    match tasks.iter().map(|t| t.id).max() {
        Some(max) if now_ms <= max => max.checked_add(1).unwrap_or_else(|| lowest_free_id(tasks)),
        _ => now_ms,
    }
}

/// Smallest id not taken; only needed once the largest id is `u64::MAX`
fn lowest_free_id(tasks: &[Task]) -> TaskId {
    (0..TaskId::MAX)
        .find(|id| tasks.iter().all(|t| t.id != *id))
        .unwrap_or_default()
}

pub fn toggle_task(tasks: &mut [Task], id: TaskId) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

pub fn delete_task(tasks: &mut Vec<Task>, id: TaskId) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Task list view filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }
}

/// Tasks passing `filter`, in insertion order
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Per-filter totals over the whole collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            all: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }

    pub fn get(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.all,
            TaskFilter::Active => self.active,
            TaskFilter::Completed => self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_open_task() {
        let mut tasks = Vec::new();
        let id = add_task(&mut tasks, "Buy milk", 1000);
        assert_eq!(id, Some(1000));
        assert_eq!(tasks, vec![Task::new(1000, "Buy milk")]);
    }

    #[test]
    fn test_add_keeps_text_as_typed() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "  padded ", 1);
        assert_eq!(tasks[0].text, "  padded ");
    }

    #[test]
    fn test_blank_add_is_noop() {
        let mut tasks = vec![Task::new(1, "existing")];
        assert!(!apply(&mut tasks, TaskAction::Add("".into()), 5));
        assert!(!apply(&mut tasks, TaskAction::Add(" \t\n".into()), 6));
        assert_eq!(tasks, vec![Task::new(1, "existing")]);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut tasks = Vec::new();
        for i in 0..20 {
            add_task(&mut tasks, &format!("task {}", i), 500);
        }
        assert_eq!(tasks.len(), 20);
        let ids: HashSet<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_id_survives_clock_step_back() {
        let mut tasks = vec![Task::new(9000, "later")];
        assert_eq!(add_task(&mut tasks, "earlier", 100), Some(9001));
    }

    #[test]
    fn test_id_after_max_value_stays_unique() {
        let mut tasks = vec![Task::new(0, "zero"), Task::new(u64::MAX, "corrupt clock")];
        assert_eq!(add_task(&mut tasks, "next", 5), Some(1));
        let ids: HashSet<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "open", 1);
        add_task(&mut tasks, "also open", 2);

        assert!(filter_tasks(&tasks, TaskFilter::Completed).is_empty());
        assert!(filter_tasks(&[], TaskFilter::All).is_empty());
        assert_eq!(filter_tasks(&tasks, TaskFilter::Active).len(), 2);
    }

    #[test]
    fn test_add_count_matches_non_blank_adds() {
        let inputs = ["a", "", "b", "   ", "c", "d"];
        let mut tasks = Vec::new();
        for (now, text) in inputs.iter().enumerate() {
            apply(&mut tasks, TaskAction::Add(text.to_string()), now as u64);
        }
        assert_eq!(texts(&tasks), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut tasks = vec![Task::new(1, "a"), Task::new(2, "b")];
        assert!(toggle_task(&mut tasks, 2));
        assert!(tasks[1].completed);
        assert!(toggle_task(&mut tasks, 2));
        assert!(!tasks[1].completed);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut tasks = vec![Task::new(1, "a")];
        assert!(!apply(&mut tasks, TaskAction::Toggle(99), 0));
        assert_eq!(tasks, vec![Task::new(1, "a")]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut tasks = vec![Task::new(1, "a"), Task::new(2, "b"), Task::new(3, "c")];
        assert!(apply(&mut tasks, TaskAction::Delete(2), 0));
        assert_eq!(texts(&tasks), vec!["a", "c"]);

        // Already gone
        assert!(!apply(&mut tasks, TaskAction::Delete(2), 0));
        assert_eq!(texts(&tasks), vec!["a", "c"]);
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let mut tasks = vec![Task::new(1, "a"), Task::new(2, "b")];
        tasks[0].completed = true;
        let snapshot = tasks.clone();

        assert_eq!(texts(&filter_tasks(&tasks, TaskFilter::All)), vec!["a", "b"]);
        assert_eq!(texts(&filter_tasks(&tasks, TaskFilter::Active)), vec!["b"]);
        assert_eq!(texts(&filter_tasks(&tasks, TaskFilter::Completed)), vec!["a"]);
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_counts_partition() {
        let mut tasks = Vec::new();
        for i in 0..7 {
            add_task(&mut tasks, "t", i);
        }
        toggle_task(&mut tasks, 1);
        toggle_task(&mut tasks, 4);
        toggle_task(&mut tasks, 5);

        let counts = TaskCounts::of(&tasks);
        assert_eq!(counts.all, counts.active + counts.completed);
        assert_eq!(counts, TaskCounts { all: 7, active: 4, completed: 3 });
        assert_eq!(TaskCounts::of(&[]), TaskCounts::default());
    }

    #[test]
    fn test_scenario_add_toggle_filter() {
        let mut tasks = Vec::new();
        apply(&mut tasks, TaskAction::Add("Buy milk".into()), 100);
        apply(&mut tasks, TaskAction::Add("Call Bob".into()), 200);
        let first = tasks[0].id;
        apply(&mut tasks, TaskAction::Toggle(first), 300);

        let active = filter_tasks(&tasks, TaskFilter::Active);
        assert_eq!(texts(&active), vec!["Call Bob"]);

        let counts = TaskCounts::of(&tasks);
        assert_eq!(counts.get(TaskFilter::All), 2);
        assert_eq!(counts.get(TaskFilter::Active), 1);
        assert_eq!(counts.get(TaskFilter::Completed), 1);
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<_> = TaskFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Active", "Completed"]);
        assert_eq!(TaskFilter::default(), TaskFilter::All);
    }
}
