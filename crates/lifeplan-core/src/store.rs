//! Task storage.
//!
//! [`TaskStore`] is the seam between the service layer and wherever tasks
//! live. [`InMemoryTaskStore`] keeps them in a `Vec` in insertion order and
//! looks them up by linear scan, which is fine for the small lists a single
//! person keeps.

use crate::{CoreError, CoreResult, Task, TaskId};

/// An ordered collection of tasks.
///
/// Listing returns tasks in the order they were appended.
pub trait TaskStore: Send + Sync {
    /// Append a task at the end of the store.
    fn append(&mut self, task: Task) -> CoreResult<()>;

    /// All tasks in insertion order.
    fn list(&self) -> CoreResult<Vec<Task>>;

    /// Find a task by id for in-place mutation.
    fn find_mut(&mut self, id: &TaskId) -> CoreResult<Option<&mut Task>>;

    /// Remove a task by id, returning it.
    fn remove(&mut self, id: &TaskId) -> CoreResult<Option<Task>>;

    /// Number of stored tasks.
    fn len(&self) -> CoreResult<usize>;
}

/// Process-local task store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with tasks (useful for testing).
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> CoreResult<Self> {
        let mut store = Self::new();
        for task in tasks {
            store.append(task)?;
        }
        Ok(store)
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}

impl TaskStore for InMemoryTaskStore {
    fn append(&mut self, task: Task) -> CoreResult<()> {
        if self.position(&task.id).is_some() {
            return Err(CoreError::Storage(format!("duplicate task id: {}", task.id)));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn list(&self) -> CoreResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn find_mut(&mut self, id: &TaskId) -> CoreResult<Option<&mut Task>> {
        Ok(self.tasks.iter_mut().find(|t| &t.id == id))
    }

    fn remove(&mut self, id: &TaskId) -> CoreResult<Option<Task>> {
        Ok(self.position(id).map(|idx| self.tasks.remove(idx)))
    }

    fn len(&self) -> CoreResult<usize> {
        Ok(self.tasks.len())
    }
}
