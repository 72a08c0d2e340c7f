//! In-memory task store.
//!
//! Tasks live in a `Vec` behind an async `RwLock` for the process lifetime;
//! ids are assigned sequentially starting at 1 and never reused. Each HTTP
//! request takes the lock once, so mutations never interleave.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
}

/// Partial update; absent fields leave the task unchanged.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TaskPatch {
    pub completed: Option<bool>,
    pub title: Option<String>,
    pub priority: Option<Priority>,
}

/// Pre/post snapshots of a successful update, handed to the history
/// classifier so it can see both sides of the transition.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub prior: Task,
    pub updated: Task,
}

pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a task with the next sequential id. Titles are not validated
    /// server-side; the client rejects empty titles before sending.
    pub async fn create(&self, title: String, priority: Priority) -> Task {
        let mut inner = self.inner.write().await;
        let task = Task {
            id: inner.next_id,
            title,
            priority,
            completed: false,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        task
    }

    /// All tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Apply a patch to the task with `id`. Returns `None` when no such task
    /// exists. The caller decides whether that is worth a warning; the HTTP
    /// contract answers success either way.
    pub async fn update(&self, id: u64, patch: TaskPatch) -> Option<UpdateOutcome> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.iter_mut().find(|t| t.id == id)?;
        let prior = task.clone();

        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }

        Some(UpdateOutcome {
            prior,
            updated: task.clone(),
        })
    }

    /// Remove the task with `id`, returning its final snapshot. `None` when
    /// absent (delete is a no-op then).
    pub async fn remove(&self, id: u64) -> Option<Task> {
        let mut inner = self.inner.write().await;
        let pos = inner.tasks.iter().position(|t| t.id == id)?;
        Some(inner.tasks.remove(pos))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_sequential_ids_from_one() {
        let store = TaskStore::new();
        let a = store.create("Buy milk".into(), Priority::High).await;
        let b = store.create("Walk dog".into(), Priority::Low).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(!a.completed);
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let store = TaskStore::new();
        let task = store.create("Buy milk".into(), Priority::High).await;

        let outcome = store
            .update(
                task.id,
                TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(outcome.updated.completed);
        assert_eq!(outcome.updated.title, "Buy milk");
        assert_eq!(outcome.updated.priority, Priority::High);
        assert!(!outcome.prior.completed);
    }

    #[tokio::test]
    async fn update_unknown_id_is_a_noop() {
        let store = TaskStore::new();
        store.create("Buy milk".into(), Priority::High).await;

        let outcome = store
            .update(
                99,
                TaskPatch {
                    title: Some("nope".into()),
                    ..Default::default()
                },
            )
            .await;

        assert!(outcome.is_none());
        assert_eq!(store.list().await[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn remove_returns_final_snapshot() {
        let store = TaskStore::new();
        let task = store.create("Buy milk".into(), Priority::Medium).await;

        let removed = store.remove(task.id).await.unwrap();
        assert_eq!(removed.title, "Buy milk");
        assert!(store.list().await.is_empty());
        assert!(store.remove(task.id).await.is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = TaskStore::new();
        let a = store.create("first".into(), Priority::Low).await;
        store.remove(a.id).await;
        let b = store.create("second".into(), Priority::Low).await;
        assert_eq!(b.id, 2);
    }
}
