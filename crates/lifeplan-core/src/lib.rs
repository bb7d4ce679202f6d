//! Lifeplan Core Domain Types
//!
//! This crate contains the task model and the logic that runs over it:
//! - Task storage abstraction and an in-memory store
//! - Keyword classifier for free-text task entry
//! - Daily analytics aggregation
//!
//! Nothing here depends on HTTP or a runtime.

pub mod analytics;
pub mod classifier;
pub mod error;
pub mod ids;
pub mod input;
pub mod status;
pub mod store;
pub mod task;

// Re-export commonly used types
pub use analytics::{DailyReport, DomainUsage, Summary};
pub use classifier::{classify_line, classify_text, Classification};
pub use error::{CoreError, CoreResult};
pub use ids::TaskId;
pub use input::{NewTask, TaskPatch};
pub use status::{Domain, TaskStatus};
pub use store::{InMemoryTaskStore, TaskStore};
pub use task::Task;
