//! HTTP request handlers.

mod analytics;
mod classify;
mod health;
mod tasks;

pub use analytics::{daily_analytics, update_ontology};
pub use classify::ai_process;
pub use health::{handle_panic, health_check, method_not_allowed, not_found, root};
pub use tasks::{create_task, delete_task, list_tasks, update_task};
