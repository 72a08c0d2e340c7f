// rest/mod.rs — HTTP/JSON API server.
//
// Axum HTTP server, default port 5000, CORS open for the browser client.
// Static client assets are served as the fallback for anything the API
// routes do not match.
//
// Endpoints:
//   POST   /tasks
//   GET    /tasks
//   PUT    /tasks/{id}
//   DELETE /tasks/{id}
//   GET    /history
//   POST   /history/cancel
//   GET    /health

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("Smart To-Do listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let web_root = ctx.config.web_root.clone();
    Router::new()
        // Health (probe only, not part of the client contract)
        .route("/health", get(routes::health::health))
        // Tasks
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        // History
        .route("/history", get(routes::history::get_history))
        .route("/history/cancel", post(routes::history::cancel_edit))
        // Browser client
        .fallback_service(ServeDir::new(web_root))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
