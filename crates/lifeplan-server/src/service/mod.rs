//! Service layer between the HTTP handlers and the task store.

pub mod task_service;

pub use task_service::TaskService;
