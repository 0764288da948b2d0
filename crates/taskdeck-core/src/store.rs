/*
[INPUT]:  Tasks accepted by the add-task form and config seed tasks
[OUTPUT]: Ordered, append-only task collection with revision notifications
[POS]:    Task list store - backing collection for the list screen
[UPDATE]: When store operations or notification semantics change
*/

use tokio::sync::watch;
use tracing::debug;

use crate::types::Task;

/// Ordered task collection. Insertion order is display order.
///
/// Every [`TaskStore::add`] bumps a revision counter published through a
/// `watch` channel so observers can re-render.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    revision: watch::Sender<u64>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Store preloaded with `tasks`. Preloading does not count as a revision.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let (revision, _) = watch::channel(0);
        Self { tasks, revision }
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
        self.revision.send_modify(|revision| *revision += 1);
        debug!(
            len = self.tasks.len(),
            revision = *self.revision.borrow(),
            "task appended"
        );
    }

    /// Live view of the contents; reflects every add made before the call.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = TaskStore::new();
        let tasks: Vec<Task> = (1..=5)
            .map(|i| Task::new(format!("Task {i}"), format!("Detail {i}")))
            .collect();
        for task in &tasks {
            store.add(task.clone());
        }

        assert_eq!(store.all(), tasks.as_slice());
        assert_eq!(store.len(), 5);
        assert_eq!(store.get(2), Some(&tasks[2]));
        assert_eq!(store.get(5), None);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut store = TaskStore::new();
        store.add(Task::new("Same", ""));
        store.add(Task::new("Same", ""));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn revision_counts_adds_only() {
        let mut store = TaskStore::with_tasks(vec![Task::new("Seed", "")]);
        assert_eq!(store.revision(), 0);
        assert!(!store.is_empty());

        store.add(Task::new("A", ""));
        store.add(Task::new("B", ""));
        assert_eq!(store.revision(), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn subscribers_observe_adds() {
        let mut store = TaskStore::new();
        let mut rx = store.subscribe();

        store.add(Task::new("Buy milk", ""));

        tokio_test::block_on(async {
            rx.changed().await.expect("store alive");
        });
        assert_eq!(*rx.borrow_and_update(), 1);
    }
}
