//! Partial task descriptions accepted by create and update.
//!
//! Clients send loosely typed JSON objects. Everything here turns such an
//! object into a typed [`NewTask`] or [`TaskPatch`] up front, so a malformed
//! field is rejected before the store is touched.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::{CoreError, CoreResult, Domain, TaskStatus};

/// Offset-less timestamp layouts accepted from clients, read as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Input for creating a task. Absent fields take the task defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub title: Option<String>,
    pub domain: Option<Domain>,
    pub status: Option<TaskStatus>,
    pub priority: Option<i64>,
    pub estimated_minutes: Option<i64>,
    pub actual_minutes: Option<i64>,
    pub scheduled_start: Option<DateTime<Utc>>,
    pub scheduled_end: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Create an input with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Builder method to set the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Builder method to set the estimate.
    pub fn with_estimated_minutes(mut self, minutes: i64) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    /// Parse a create request body.
    ///
    /// `null` counts as absent, except for `priority` and `estimated_minutes`
    /// which must be integers when the key is given.
    pub fn from_json(body: &Value) -> CoreResult<Self> {
        let fields = as_object(body)?;
        let present = |key: &str| fields.get(key).filter(|v| !v.is_null());
        let int = |key: &str| fields.get(key).map(|v| coerce_int(key, v)).transpose();

        Ok(Self {
            title: present("title").map(|v| string_field("title", v)).transpose()?,
            domain: present("domain").map(domain_field).transpose()?,
            status: present("status").map(status_field).transpose()?,
            priority: int("priority")?,
            estimated_minutes: int("estimated_minutes")?,
            actual_minutes: present("actual_minutes")
                .map(|v| coerce_int("actual_minutes", v))
                .transpose()?,
            scheduled_start: present("scheduled_start")
                .map(|v| timestamp_field("scheduled_start", v))
                .transpose()?,
            scheduled_end: present("scheduled_end")
                .map(|v| timestamp_field("scheduled_end", v))
                .transpose()?,
            completed_at: present("completed_at")
                .map(|v| timestamp_field("completed_at", v))
                .transpose()?,
        })
    }
}

/// Field updates for an existing task.
///
/// The outer `Option` says whether the key was present in the request. For
/// nullable fields the inner `Option` carries the new value, `None` clearing
/// it. `id` and `created_at` are never patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub domain: Option<Domain>,
    pub status: Option<TaskStatus>,
    pub priority: Option<i64>,
    pub estimated_minutes: Option<i64>,
    pub actual_minutes: Option<Option<i64>>,
    pub scheduled_start: Option<Option<DateTime<Utc>>>,
    pub scheduled_end: Option<Option<DateTime<Utc>>>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Patch that only changes the status.
    pub fn status(status: impl Into<TaskStatus>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Parse an update request body.
    ///
    /// Unknown keys are dropped. `null` on a non-nullable field leaves the
    /// field unchanged.
    pub fn from_json(body: &Value) -> CoreResult<Self> {
        let fields = as_object(body)?;
        let mut patch = Self::default();

        for (key, value) in fields {
            match key.as_str() {
                "title" => patch.title = non_null(value, |v| string_field("title", v))?,
                "domain" => patch.domain = non_null(value, domain_field)?,
                "status" => patch.status = non_null(value, status_field)?,
                "priority" => patch.priority = non_null(value, |v| coerce_int("priority", v))?,
                "estimated_minutes" => {
                    patch.estimated_minutes =
                        non_null(value, |v| coerce_int("estimated_minutes", v))?
                }
                "actual_minutes" => {
                    patch.actual_minutes =
                        Some(non_null(value, |v| coerce_int("actual_minutes", v))?)
                }
                "scheduled_start" => {
                    patch.scheduled_start =
                        Some(non_null(value, |v| timestamp_field("scheduled_start", v))?)
                }
                "scheduled_end" => {
                    patch.scheduled_end =
                        Some(non_null(value, |v| timestamp_field("scheduled_end", v))?)
                }
                "completed_at" => {
                    patch.completed_at =
                        Some(non_null(value, |v| timestamp_field("completed_at", v))?)
                }
                _ => {}
            }
        }

        Ok(patch)
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn as_object(body: &Value) -> CoreResult<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| CoreError::invalid_input("request body must be a JSON object"))
}

fn non_null<T>(value: &Value, parse: impl Fn(&Value) -> CoreResult<T>) -> CoreResult<Option<T>> {
    if value.is_null() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

fn string_field(field: &str, value: &Value) -> CoreResult<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| CoreError::invalid_input(format!("{field} must be a string")))
}

fn domain_field(value: &Value) -> CoreResult<Domain> {
    string_field("domain", value)?.parse()
}

fn status_field(value: &Value) -> CoreResult<TaskStatus> {
    string_field("status", value).map(TaskStatus::from)
}

/// Coerce a JSON value to an integer.
///
/// Accepts integers, finite floats (truncated toward zero), booleans and
/// strings holding an integer.
pub fn coerce_int(field: &str, value: &Value) -> CoreResult<i64> {
    let invalid = || CoreError::invalid_input(format!("{field} must be an integer, got {value}"));

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
                _ => Err(invalid()),
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Parse a client-supplied timestamp.
///
/// RFC 3339 strings are converted to UTC; offset-less ISO 8601 date-times are
/// read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn timestamp_field(field: &str, value: &Value) -> CoreResult<DateTime<Utc>> {
    let raw = string_field(field, value)?;
    parse_timestamp(raw.trim()).ok_or_else(|| {
        CoreError::invalid_input(format!("{field} must be an ISO 8601 timestamp, got '{raw}'"))
    })
}
