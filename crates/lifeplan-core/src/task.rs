//! The task entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Domain, NewTask, TaskId, TaskPatch, TaskStatus};

/// Default priority for new tasks (smaller is more urgent).
pub const DEFAULT_PRIORITY: i64 = 3;

/// Default effort estimate for new tasks, in minutes.
pub const DEFAULT_ESTIMATED_MINUTES: i64 = 30;

/// A Task is a unit of work with scheduling and completion metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,

    /// Free-text title.
    pub title: String,

    /// Life domain the task belongs to.
    pub domain: Domain,

    /// Current task status.
    pub status: TaskStatus,

    /// Priority, smaller is more urgent.
    pub priority: i64,

    /// Estimated effort in minutes.
    pub estimated_minutes: i64,

    /// When the task was created.
    pub created_at: DateTime<Utc>,

    /// Planned start time.
    pub scheduled_start: Option<DateTime<Utc>>,

    /// Planned end time.
    pub scheduled_end: Option<DateTime<Utc>>,

    /// Effort actually spent, in minutes.
    pub actual_minutes: Option<i64>,

    /// When the task was completed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new pending Task with default priority and estimate.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            domain: Domain::default(),
            status: TaskStatus::Pending,
            priority: DEFAULT_PRIORITY,
            estimated_minutes: DEFAULT_ESTIMATED_MINUTES,
            created_at: Utc::now(),
            scheduled_start: None,
            scheduled_end: None,
            actual_minutes: None,
            completed_at: None,
        }
    }

    /// Build a Task from a partial description, filling in defaults.
    pub fn from_new(input: NewTask) -> Self {
        let mut task = Self::new(input.title.unwrap_or_default());
        if let Some(domain) = input.domain {
            task.domain = domain;
        }
        if let Some(status) = input.status {
            task.status = status;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(minutes) = input.estimated_minutes {
            task.estimated_minutes = minutes;
        }
        task.actual_minutes = input.actual_minutes;
        task.scheduled_start = input.scheduled_start;
        task.scheduled_end = input.scheduled_end;
        task.completed_at = input.completed_at;
        task
    }

    /// Builder method to set the domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Builder method to set priority and estimate together.
    pub fn with_effort(mut self, priority: i64, estimated_minutes: i64) -> Self {
        self.priority = priority;
        self.estimated_minutes = estimated_minutes;
        self
    }

    /// Builder method to set a specific ID (useful for testing).
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Apply a patch in place, then stamp `completed_at` if the task is now
    /// completed and has no completion time yet.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(domain) = patch.domain {
            self.domain = domain;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(minutes) = patch.estimated_minutes {
            self.estimated_minutes = minutes;
        }
        if let Some(actual) = patch.actual_minutes {
            self.actual_minutes = actual;
        }
        if let Some(start) = patch.scheduled_start {
            self.scheduled_start = start;
        }
        if let Some(end) = patch.scheduled_end {
            self.scheduled_end = end;
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = completed_at;
        }

        if self.is_completed() && self.completed_at.is_none() {
            self.completed_at = Some(Utc::now());
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Minutes counted against the task's domain: actual effort when
    /// recorded and non-zero, the estimate otherwise.
    pub fn effective_minutes(&self) -> i64 {
        self.actual_minutes
            .filter(|&minutes| minutes != 0)
            .unwrap_or(self.estimated_minutes)
    }
}
