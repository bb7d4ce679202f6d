//! Task status and life domain enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Life-management category a task belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Study, research, coursework.
    Academic,
    /// Paid work and projects.
    Income,
    /// Personal development: exercise, reading, skills.
    Growth,
    /// Everything else.
    #[default]
    Life,
}

impl Domain {
    /// All domains, in the order reports list them.
    pub const ALL: [Domain; 4] = [
        Domain::Academic,
        Domain::Income,
        Domain::Growth,
        Domain::Life,
    ];

    /// Wire name of the domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Income => "income",
            Self::Growth => "growth",
            Self::Life => "life",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CoreError::invalid_input(format!("unknown domain '{s}'")))
    }
}

/// Status of a task.
///
/// Only `pending` and `completed` carry meaning here; clients are free to use
/// other values (`in_progress`, `pool`, ...) which are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
    Other(String),
}

impl TaskStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Other(s) => s,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}
