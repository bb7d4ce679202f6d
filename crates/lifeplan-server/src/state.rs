//! Shared application state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use lifeplan_core::{CoreResult, InMemoryTaskStore, TaskStore};

/// Shared application state.
pub struct AppState {
    /// Task store. Every service operation takes the lock once, so a
    /// classifier batch or an update is never interleaved with another
    /// request.
    pub store: RwLock<Box<dyn TaskStore>>,

    /// When the server state was created.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState with an empty in-memory store, wrapped in Arc.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a new AppState backed by the given store.
    pub fn with_store(store: impl TaskStore + 'static) -> Arc<Self> {
        Arc::new(Self {
            store: RwLock::new(Box::new(store)),
            started_at: Utc::now(),
        })
    }

    /// Get the number of tasks.
    pub async fn task_count(&self) -> CoreResult<usize> {
        self.store.read().await.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: RwLock::new(Box::new(InMemoryTaskStore::new())),
            started_at: Utc::now(),
        }
    }
}
