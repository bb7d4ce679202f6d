//! Daily analytics over the task list.
//!
//! The report always covers every stored task; the requested date is only
//! echoed back by callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Domain, Task};

/// Hours budgeted per domain per day.
pub const ALLOCATED_HOURS_PER_DOMAIN: f64 = 4.0;

/// Placeholder score until real productivity scoring exists.
pub const PRODUCTIVITY_SCORE: f64 = 85.0;

/// Recommendations attached to every report.
pub const RECOMMENDATIONS: [&str; 2] = [
    "💡 Spread tasks sensibly across your time domains",
    "📈 Keep up a steady working rhythm",
];

/// Overall numbers for the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completion_rate: f64,
    pub total_hours_planned: f64,
    pub productivity_score: f64,
}

/// Per-domain usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainUsage {
    pub allocated_hours: f64,
    pub used_hours: f64,
    pub task_count: usize,
    /// Completed share of the domain's tasks, in `[0, 1]`.
    pub completion_rate: f64,
}

impl Default for DomainUsage {
    fn default() -> Self {
        Self {
            allocated_hours: ALLOCATED_HOURS_PER_DOMAIN,
            used_hours: 0.0,
            task_count: 0,
            completion_rate: 0.0,
        }
    }
}

/// Aggregated statistics for the whole store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub summary: Summary,
    pub domain_usage: BTreeMap<Domain, DomainUsage>,
    pub recommendations: Vec<String>,
}

impl DailyReport {
    /// Aggregate over `tasks`.
    pub fn compute<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut usage: BTreeMap<Domain, DomainUsage> =
            Domain::ALL.into_iter().map(|d| (d, DomainUsage::default())).collect();
        let mut completed_by_domain: BTreeMap<Domain, usize> = BTreeMap::new();

        let mut total_tasks = 0usize;
        let mut completed_tasks = 0usize;

        for task in tasks {
            total_tasks += 1;
            if task.is_completed() {
                completed_tasks += 1;
                *completed_by_domain.entry(task.domain).or_default() += 1;
            }

            let entry = usage.entry(task.domain).or_default();
            entry.task_count += 1;
            entry.used_hours += task.effective_minutes() as f64 / 60.0;
        }

        for (domain, entry) in usage.iter_mut() {
            let completed = completed_by_domain.get(domain).copied().unwrap_or(0);
            entry.completion_rate = if entry.task_count > 0 {
                completed as f64 / entry.task_count as f64
            } else {
                0.0
            };
        }

        let summary = Summary {
            total_tasks,
            completed_tasks,
            completion_rate: completed_tasks as f64 / total_tasks.max(1) as f64,
            total_hours_planned: usage.values().map(|u| u.used_hours).sum(),
            productivity_score: PRODUCTIVITY_SCORE,
        };

        Self {
            summary,
            domain_usage: usage,
            recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TaskPatch, TaskStatus};

    fn completed(mut task: Task) -> Task {
        task.apply_patch(TaskPatch::status(TaskStatus::Completed));
        task
    }

    #[test]
    fn test_empty_store() {
        let report = DailyReport::compute(&Vec::<Task>::new());

        assert_eq!(report.summary.total_tasks, 0);
        assert_eq!(report.summary.completed_tasks, 0);
        assert_eq!(report.summary.completion_rate, 0.0);
        assert_eq!(report.summary.total_hours_planned, 0.0);
        assert_eq!(report.domain_usage.len(), 4);
        for usage in report.domain_usage.values() {
            assert_eq!(usage.task_count, 0);
            assert_eq!(usage.completion_rate, 0.0);
            assert_eq!(usage.allocated_hours, 4.0);
        }
        assert_eq!(report.recommendations.len(), 2);
    }

    #[test]
    fn test_per_domain_rates_and_hours() {
        let mut with_actual = Task::new("Paper").with_domain(Domain::Academic);
        with_actual.actual_minutes = Some(90);

        let tasks = vec![
            completed(Task::new("Lecture").with_domain(Domain::Academic).with_effort(2, 60)),
            with_actual,
            Task::new("Invoice").with_domain(Domain::Income).with_effort(1, 45),
            completed(Task::new("Groceries").with_effort(3, 30)),
        ];

        let report = DailyReport::compute(&tasks);

        assert_eq!(report.summary.total_tasks, 4);
        assert_eq!(report.summary.completed_tasks, 2);
        assert_eq!(report.summary.completion_rate, 0.5);

        let academic = &report.domain_usage[&Domain::Academic];
        assert_eq!(academic.task_count, 2);
        assert_eq!(academic.used_hours, 2.5);
        assert_eq!(academic.completion_rate, 0.5);

        let income = &report.domain_usage[&Domain::Income];
        assert_eq!(income.completion_rate, 0.0);
        assert_eq!(income.used_hours, 0.75);

        let life = &report.domain_usage[&Domain::Life];
        assert_eq!(life.completion_rate, 1.0);

        let growth = &report.domain_usage[&Domain::Growth];
        assert_eq!(growth.task_count, 0);
        assert_eq!(growth.completion_rate, 0.0);

        assert_eq!(report.summary.total_hours_planned, 2.5 + 0.75 + 0.5);
    }

    #[test]
    fn test_zero_actual_minutes_falls_back_to_estimate() {
        let mut task = Task::new("Skipped").with_effort(3, 30);
        task.actual_minutes = Some(0);
        let report = DailyReport::compute([&task]);
        assert_eq!(report.domain_usage[&Domain::Life].used_hours, 0.5);
    }

    #[test]
    fn test_rates_stay_in_unit_interval() {
        let tasks: Vec<Task> = (0..7)
            .map(|i| {
                let task = Task::new(format!("t{i}")).with_domain(Domain::ALL[i % 4]);
                if i % 3 == 0 {
                    completed(task)
                } else {
                    task
                }
            })
            .collect();

        let report = DailyReport::compute(&tasks);
        assert!((0.0..=1.0).contains(&report.summary.completion_rate));
        for usage in report.domain_usage.values() {
            assert!((0.0..=1.0).contains(&usage.completion_rate));
        }
    }

    #[test]
    fn test_domain_usage_serializes_with_domain_keys() {
        let report = DailyReport::compute(&Vec::<Task>::new());
        let value = serde_json::to_value(&report).unwrap();
        for key in ["academic", "income", "growth", "life"] {
            assert!(value["domain_usage"].get(key).is_some(), "{key}");
        }
    }
}
