//! TaskService - task CRUD, classifier batches and daily analytics.

use std::sync::Arc;

use tracing::{debug, info, warn};

use lifeplan_core::{
    classify_text, CoreError, CoreResult, DailyReport, NewTask, Task, TaskId, TaskPatch,
};

use crate::state::AppState;

/// Task operations over the shared store.
#[derive(Clone)]
pub struct TaskService {
    state: Arc<AppState>,
}

impl TaskService {
    /// Create a new TaskService.
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// All tasks in creation order.
    pub async fn list(&self) -> CoreResult<Vec<Task>> {
        self.state.store.read().await.list()
    }

    /// Create a task from a partial description.
    pub async fn create(&self, input: NewTask) -> CoreResult<Task> {
        let task = Task::from_new(input);

        self.state.store.write().await.append(task.clone())?;

        info!(
            task_id = %task.id,
            domain = %task.domain,
            priority = task.priority,
            "Task created"
        );

        Ok(task)
    }

    /// Apply a patch to the task with the given id.
    pub async fn update(&self, id: &TaskId, patch: TaskPatch) -> CoreResult<Task> {
        let mut store = self.state.store.write().await;

        let task = store.find_mut(id)?.ok_or_else(|| {
            warn!(task_id = %id, "Update for unknown task");
            CoreError::TaskNotFound(id.to_string())
        })?;

        let was_completed = task.completed_at.is_some();
        task.apply_patch(patch);

        if !was_completed && task.completed_at.is_some() {
            info!(task_id = %id, "Task completed");
        } else {
            debug!(task_id = %id, status = %task.status, "Task updated");
        }

        Ok(task.clone())
    }

    /// Delete a task, returning the removed record.
    pub async fn delete(&self, id: &TaskId) -> CoreResult<Task> {
        let removed = self.state.store.write().await.remove(id)?;

        match removed {
            Some(task) => {
                info!(task_id = %id, title = %task.title, "Task deleted");
                Ok(task)
            }
            None => {
                warn!(task_id = %id, "Delete for unknown task");
                Err(CoreError::TaskNotFound(id.to_string()))
            }
        }
    }

    /// Classify free text into tasks and append them in input order.
    ///
    /// A failed append removes the tasks already stored for the batch and
    /// returns the append error.
    pub async fn classify(&self, input: &str) -> CoreResult<Vec<Task>> {
        let tasks = classify_text(input)?;

        let mut store = self.state.store.write().await;
        for (appended, task) in tasks.iter().enumerate() {
            if let Err(e) = store.append(task.clone()) {
                warn!(error = %e, appended, "Batch append failed, rolling back");
                for stored in &tasks[..appended] {
                    if let Err(remove_err) = store.remove(&stored.id) {
                        warn!(task_id = %stored.id, error = %remove_err, "Rollback remove failed");
                    }
                }
                return Err(e);
            }
        }
        drop(store);

        info!(count = tasks.len(), "Classified task batch");
        Ok(tasks)
    }

    /// Aggregate statistics over every stored task.
    pub async fn daily_report(&self) -> CoreResult<DailyReport> {
        let tasks = self.state.store.read().await.list()?;
        Ok(DailyReport::compute(&tasks))
    }

    /// Number of stored tasks.
    pub async fn count(&self) -> CoreResult<usize> {
        self.state.task_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeplan_core::{Domain, InMemoryTaskStore, TaskStatus, TaskStore};

    fn service() -> TaskService {
        TaskService::new(AppState::new())
    }

    /// Store that accepts a fixed number of appends and fails the first
    /// `remove_failures` removals.
    struct FlakyStore {
        inner: InMemoryTaskStore,
        appends_left: usize,
        remove_failures: usize,
    }

    impl TaskStore for FlakyStore {
        fn append(&mut self, task: Task) -> CoreResult<()> {
            if self.appends_left == 0 {
                return Err(CoreError::Storage("store full".to_string()));
            }
            self.appends_left -= 1;
            self.inner.append(task)
        }

        fn list(&self) -> CoreResult<Vec<Task>> {
            self.inner.list()
        }

        fn find_mut(&mut self, id: &TaskId) -> CoreResult<Option<&mut Task>> {
            self.inner.find_mut(id)
        }

        fn remove(&mut self, id: &TaskId) -> CoreResult<Option<Task>> {
            if self.remove_failures > 0 {
                self.remove_failures -= 1;
                return Err(CoreError::Storage("remove failed".to_string()));
            }
            self.inner.remove(id)
        }

        fn len(&self) -> CoreResult<usize> {
            self.inner.len()
        }
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let svc = service();
        let task = svc.create(NewTask::default()).await.unwrap();

        assert_eq!(task.domain, Domain::Life);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, 3);
        assert_eq!(task.estimated_minutes, 30);
        assert!(!task.id.as_str().is_empty());
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let svc = service();
        let a = svc.create(NewTask::titled("a")).await.unwrap();
        let b = svc.create(NewTask::titled("b")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_list_is_creation_order_and_stable() {
        let svc = service();
        for title in ["first", "second", "third"] {
            svc.create(NewTask::titled(title)).await.unwrap();
        }

        let first = svc.list().await.unwrap();
        let second = svc.list().await.unwrap();
        let titles: Vec<&str> = first.iter().map(|t| t.title.as_str()).collect();

        assert_eq!(titles, ["first", "second", "third"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_complete_sets_completed_at_once() {
        let svc = service();
        let task = svc.create(NewTask::titled("essay")).await.unwrap();

        let done = svc.update(&task.id, TaskPatch::status("completed")).await.unwrap();
        let stamped = done.completed_at.expect("completed_at should be set");

        let again = svc.update(&task.id, TaskPatch::status("completed")).await.unwrap();
        assert_eq!(again.completed_at, Some(stamped));
        assert_eq!(again.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let svc = service();
        let err = svc
            .update(&TaskId::new("task_missing"), TaskPatch::status("completed"))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::TaskNotFound("task_missing".to_string()));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_store_alone() {
        let svc = service();
        svc.create(NewTask::titled("keep me")).await.unwrap();
        let before = svc.list().await.unwrap();

        let err = svc.delete(&TaskId::new("task_missing")).await.unwrap_err();

        assert!(matches!(err, CoreError::TaskNotFound(_)));
        assert_eq!(svc.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_task() {
        let svc = service();
        let task = svc.create(NewTask::titled("groceries")).await.unwrap();

        let removed = svc.delete(&task.id).await.unwrap();

        assert_eq!(removed.title, "groceries");
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_classify_appends_in_order() {
        let svc = service();
        svc.create(NewTask::titled("existing")).await.unwrap();

        let created = svc.classify("学习数学\n工作赚钱\n随便走走\n# comment\n").await.unwrap();
        assert_eq!(created.len(), 3);

        let titles: Vec<String> = svc.list().await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["existing", "学习数学", "工作赚钱", "随便走走"]);
    }

    #[tokio::test]
    async fn test_classify_blank_input_stores_nothing() {
        let svc = service();
        let err = svc.classify("   \n  ").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_classify_rollback_continues_past_remove_failure() {
        let svc = TaskService::new(AppState::with_store(FlakyStore {
            inner: InMemoryTaskStore::new(),
            appends_left: 2,
            remove_failures: 1,
        }));

        let err = svc.classify("学习数学\n工作赚钱\n随便走走").await.unwrap_err();

        // The append error wins over the rollback error.
        assert_eq!(err, CoreError::Storage("store full".to_string()));
        // Only the task whose removal failed is left behind.
        let titles: Vec<String> = svc.list().await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["学习数学"]);
    }

    #[tokio::test]
    async fn test_daily_report_over_injected_store() {
        let mut done = Task::new("done").with_domain(Domain::Growth);
        done.apply_patch(TaskPatch::status("completed"));
        let store = InMemoryTaskStore::with_tasks([done, Task::new("open")]).unwrap();
        assert_eq!(store.len().unwrap(), 2);

        let svc = TaskService::new(AppState::with_store(store));
        let report = svc.daily_report().await.unwrap();

        assert_eq!(report.summary.total_tasks, 2);
        assert_eq!(report.summary.completed_tasks, 1);
        assert_eq!(report.domain_usage[&Domain::Growth].completion_rate, 1.0);
        assert_eq!(report.domain_usage[&Domain::Life].completion_rate, 0.0);
    }
}
