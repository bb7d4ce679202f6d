//! Lifeplan Server Library
//!
//! HTTP task tracking service: task CRUD, free-text task entry and daily
//! analytics over an in-memory store.

pub mod config;
pub mod http;
pub mod service;
pub mod state;

pub use config::Config;
pub use http::create_router;
pub use service::TaskService;
pub use state::AppState;
