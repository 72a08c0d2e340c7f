pub mod config;
pub mod rest;
pub mod tasks;

use std::sync::Arc;

use config::ServerConfig;
use tasks::{HistoryLog, TaskStore};

/// Shared application state passed to every HTTP handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// In-memory task store. Lives for the process lifetime; never persisted.
    pub tasks: Arc<TaskStore>,
    /// Completed / edited / cancelled / deleted activity lists.
    pub history: Arc<HistoryLog>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            tasks: Arc::new(TaskStore::new()),
            history: Arc::new(HistoryLog::new()),
            started_at: std::time::Instant::now(),
        }
    }
}
