// rest/routes/history.rs — Activity history routes.

use axum::{
    extract::State,
    http::{header, HeaderName},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::tasks::history::HistorySnapshot;
use crate::tasks::Priority;
use crate::AppContext;

/// `GET /history` is sent with no-cache headers so the browser re-fetches
/// after every mutation instead of replaying a stale panel.
pub async fn get_history(
    State(ctx): State<Arc<AppContext>>,
) -> ([(HeaderName, &'static str); 3], Json<HistorySnapshot>) {
    let snapshot = ctx.history.snapshot().await;
    (
        [
            (
                header::CACHE_CONTROL,
                "no-store, no-cache, must-revalidate, private",
            ),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        Json(snapshot),
    )
}

#[derive(Deserialize)]
pub struct CancelEditRequest {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
}

/// Client-initiated signal: the user opened edit mode and backed out.
/// Not derived from any store mutation.
pub async fn cancel_edit(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CancelEditRequest>,
) -> Json<Value> {
    info!("cancelled edit tracked for task {}", body.id);
    ctx.history
        .record_cancelled(body.id, body.title, body.priority)
        .await;
    Json(json!({ "message": "Cancelled edit tracked" }))
}
