// rest/routes/tasks.rs — Task CRUD routes.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::tasks::{Priority, Task, TaskPatch};
use crate::AppContext;

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub priority: Priority,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateTaskRequest>,
) -> Json<Task> {
    let task = ctx.tasks.create(body.title, body.priority).await;
    info!("created task {} ({:?})", task.id, task.priority);
    Json(task)
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.tasks.list().await)
}

/// Apply a partial update. Always answers `{"message":"Updated"}`; an
/// unknown id is logged as a warning, never surfaced as an error.
pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> Json<Value> {
    match ctx.tasks.update(id, patch).await {
        Some(outcome) => {
            ctx.history.record_update(&outcome).await;
            info!("updated task {}: {:?}", id, outcome.updated);
        }
        None => warn!("task not found: {id}"),
    }
    Json(json!({ "message": "Updated" }))
}

/// Delete a task, snapshotting it into the deleted history first. Always
/// answers `{"message":"Deleted"}`, even when the id does not exist.
pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Json<Value> {
    match ctx.tasks.remove(id).await {
        Some(task) => {
            ctx.history.record_deleted(&task).await;
            info!("deleted task {}", id);
        }
        None => warn!("task not found: {id}"),
    }
    Json(json!({ "message": "Deleted" }))
}
