pub mod history;
pub mod store;

pub use history::HistoryLog;
pub use store::{Priority, Task, TaskPatch, TaskStore};
