//! Activity history: four append-only lists recording task transitions.
//!
//! Completed and Edited entries are derived from update snapshots by
//! `record_update`; Cancelled and Deleted entries are appended directly by
//! their endpoints. The Completed list is the only one entries are ever
//! removed from (when a task is un-completed). Lists are unbounded; the
//! client displays the latest five per list.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use super::store::{Priority, Task, UpdateOutcome};

#[derive(Debug, Clone, Serialize)]
pub struct CompletedEntry {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditedEntry {
    pub id: u64,
    pub old_title: String,
    pub new_title: String,
    pub old_priority: Priority,
    pub new_priority: Priority,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelledEntry {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedEntry {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
}

/// Owned clone of all four lists, shaped exactly like the `GET /history`
/// response body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HistorySnapshot {
    pub completed: Vec<CompletedEntry>,
    pub edited: Vec<EditedEntry>,
    pub cancelled: Vec<CancelledEntry>,
    pub deleted: Vec<DeletedEntry>,
}

pub struct HistoryLog {
    inner: RwLock<HistorySnapshot>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HistorySnapshot::default()),
        }
    }

    /// Classify an update and append to the matching lists.
    ///
    /// Completion (false→true) appends a Completed entry carrying the
    /// post-update title/priority; un-completion (true→false) removes every
    /// Completed entry for this id. Independently, a title or priority that
    /// changed appends one Edited entry capturing both old and new values.
    /// Completing and renaming in one update produces two entries.
    pub async fn record_update(&self, outcome: &UpdateOutcome) {
        let prior = &outcome.prior;
        let updated = &outcome.updated;
        let now = Utc::now();
        let mut inner = self.inner.write().await;

        if !prior.completed && updated.completed {
            inner.completed.push(CompletedEntry {
                id: updated.id,
                title: updated.title.clone(),
                priority: updated.priority,
                timestamp: now,
            });
        } else if prior.completed && !updated.completed {
            inner.completed.retain(|e| e.id != updated.id);
        }

        if prior.title != updated.title || prior.priority != updated.priority {
            inner.edited.push(EditedEntry {
                id: updated.id,
                old_title: prior.title.clone(),
                new_title: updated.title.clone(),
                old_priority: prior.priority,
                new_priority: updated.priority,
                timestamp: now,
            });
        }
    }

    /// Append a Cancelled entry. Fired by the client's "cancel edit" signal;
    /// never deduplicated or removed.
    pub async fn record_cancelled(&self, id: u64, title: String, priority: Priority) {
        let mut inner = self.inner.write().await;
        inner.cancelled.push(CancelledEntry {
            id,
            title,
            priority,
            timestamp: Utc::now(),
        });
    }

    /// Append a Deleted entry from the task's pre-deletion snapshot.
    pub async fn record_deleted(&self, task: &Task) {
        let mut inner = self.inner.write().await;
        inner.deleted.push(DeletedEntry {
            id: task.id,
            title: task.title.clone(),
            priority: task.priority,
            timestamp: Utc::now(),
        });
    }

    pub async fn snapshot(&self) -> HistorySnapshot {
        self.inner.read().await.clone()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, title: &str, priority: Priority, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            priority,
            completed,
        }
    }

    fn outcome(prior: Task, updated: Task) -> UpdateOutcome {
        UpdateOutcome { prior, updated }
    }

    #[tokio::test]
    async fn completing_appends_post_update_snapshot() {
        let log = HistoryLog::new();
        log.record_update(&outcome(
            task(1, "Buy milk", Priority::High, false),
            task(1, "Buy oat milk", Priority::High, true),
        ))
        .await;

        let snap = log.snapshot().await;
        assert_eq!(snap.completed.len(), 1);
        // Post-update title, not the prior one.
        assert_eq!(snap.completed[0].title, "Buy oat milk");
        // Title changed in the same update, so both branches fired.
        assert_eq!(snap.edited.len(), 1);
    }

    #[tokio::test]
    async fn uncompleting_removes_all_matching_completed_entries() {
        let log = HistoryLog::new();
        let done = task(1, "Buy milk", Priority::High, true);
        let pending = task(1, "Buy milk", Priority::High, false);

        log.record_update(&outcome(pending.clone(), done.clone())).await;
        log.record_update(&outcome(done, pending)).await;

        let snap = log.snapshot().await;
        assert!(snap.completed.is_empty());
        assert!(snap.edited.is_empty());
    }

    #[tokio::test]
    async fn priority_only_edit_repeats_old_title() {
        let log = HistoryLog::new();
        log.record_update(&outcome(
            task(3, "Buy milk", Priority::High, false),
            task(3, "Buy milk", Priority::Low, false),
        ))
        .await;

        let snap = log.snapshot().await;
        assert_eq!(snap.edited.len(), 1);
        let entry = &snap.edited[0];
        assert_eq!(entry.old_title, entry.new_title);
        assert_eq!(entry.old_priority, Priority::High);
        assert_eq!(entry.new_priority, Priority::Low);
        assert!(snap.completed.is_empty());
    }

    #[tokio::test]
    async fn unchanged_update_records_nothing() {
        let log = HistoryLog::new();
        let t = task(1, "Buy milk", Priority::High, false);
        log.record_update(&outcome(t.clone(), t)).await;

        let snap = log.snapshot().await;
        assert!(snap.completed.is_empty());
        assert!(snap.edited.is_empty());
    }

    #[tokio::test]
    async fn cancellations_are_never_deduplicated() {
        let log = HistoryLog::new();
        for _ in 0..3 {
            log.record_cancelled(7, "Buy milk".into(), Priority::Medium).await;
        }
        assert_eq!(log.snapshot().await.cancelled.len(), 3);
    }

    #[tokio::test]
    async fn deletion_snapshots_the_task() {
        let log = HistoryLog::new();
        log.record_deleted(&task(2, "Walk dog", Priority::Low, true)).await;

        let snap = log.snapshot().await;
        assert_eq!(snap.deleted.len(), 1);
        assert_eq!(snap.deleted[0].id, 2);
        assert_eq!(snap.deleted[0].title, "Walk dog");
    }

    #[test]
    fn edited_entry_serializes_camel_case() {
        let entry = EditedEntry {
            id: 1,
            old_title: "a".into(),
            new_title: "b".into(),
            old_priority: Priority::High,
            new_priority: Priority::High,
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("oldTitle").is_some());
        assert!(value.get("newPriority").is_some());
        assert_eq!(value["oldPriority"], "High");
    }
}
