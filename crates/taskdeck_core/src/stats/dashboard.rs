//! Dashboard counters, chart series and per-project progress.
//!
//! # Invariants
//! - `completed_tasks + pending_tasks == total_tasks`.
//! - "Today" is `[00:00, next 00:00)` of the calendar day containing `now`.
//! - Tasks whose project is gone are left out of per-project counts.

use crate::clock::day_bounds;
use crate::model::project::{Project, ProjectId};
use crate::model::task::{Priority, Task};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Task counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    fn bump(&mut self, priority: Priority) {
        match priority {
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }
}

/// Task count for one existing project, in project insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTaskCount {
    pub project_id: ProjectId,
    pub name: String,
    pub count: usize,
}

/// Dashboard counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub overdue_tasks: usize,
    pub completed_today: usize,
    pub due_today: usize,
    pub by_priority: PriorityCounts,
    /// One entry per project, including projects with zero tasks.
    pub by_project: Vec<ProjectTaskCount>,
}

impl DashboardStats {
    /// Count for the first project named `name`, if any.
    pub fn project_count(&self, name: &str) -> Option<usize> {
        self.by_project
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.count)
    }
}

/// One chart: parallel `series` and `labels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub series: Vec<usize>,
    pub labels: Vec<String>,
}

/// Chart-ready projections of [`DashboardStats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// `[completed, pending]`.
    pub completion_chart: ChartSeries,
    /// `[high, medium, low]`.
    pub priority_chart: ChartSeries,
}

/// Completion progress of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub project_id: ProjectId,
    pub task_count: usize,
    pub completed_count: usize,
    /// Rounded to the nearest whole percent; 0 for an empty project.
    pub completion_percent: u8,
}

/// Computes all dashboard counters at `now`.
pub fn compute_stats(tasks: &[Task], projects: &[Project], now: NaiveDateTime) -> DashboardStats {
    let (today_start, tomorrow_start) = day_bounds(now);
    let in_today = |at: NaiveDateTime| at >= today_start && at < tomorrow_start;

    let mut stats = DashboardStats {
        total_tasks: tasks.len(),
        completed_tasks: 0,
        pending_tasks: 0,
        overdue_tasks: 0,
        completed_today: 0,
        due_today: 0,
        by_priority: PriorityCounts::default(),
        by_project: Vec::with_capacity(projects.len()),
    };

    for task in tasks {
        if task.completed {
            stats.completed_tasks += 1;
            if task.completed_at.is_some_and(in_today) {
                stats.completed_today += 1;
            }
        } else {
            stats.pending_tasks += 1;
        }
        if task.is_overdue(now) {
            stats.overdue_tasks += 1;
        }
        if in_today(task.deadline) {
            stats.due_today += 1;
        }
        stats.by_priority.bump(task.priority);
    }

    stats.by_project = projects
        .iter()
        .map(|project| ProjectTaskCount {
            project_id: project.id,
            name: project.name.clone(),
            count: tasks
                .iter()
                .filter(|task| task.project_id == project.id)
                .count(),
        })
        .collect();

    stats
}

/// Shapes counters into the completion and priority charts.
pub fn chart_data(stats: &DashboardStats) -> ChartData {
    ChartData {
        completion_chart: ChartSeries {
            series: vec![stats.completed_tasks, stats.pending_tasks],
            labels: labels(&["Completed", "Pending"]),
        },
        priority_chart: ChartSeries {
            series: vec![
                stats.by_priority.high,
                stats.by_priority.medium,
                stats.by_priority.low,
            ],
            labels: labels(&["High", "Medium", "Low"]),
        },
    }
}

/// Per-project completion progress, in project order.
pub fn project_progress(tasks: &[Task], projects: &[Project]) -> Vec<ProjectProgress> {
    projects
        .iter()
        .map(|project| {
            let (task_count, completed_count) = tasks
                .iter()
                .filter(|task| task.project_id == project.id)
                .fold((0usize, 0usize), |(total, done), task| {
                    (total + 1, done + usize::from(task.completed))
                });
            ProjectProgress {
                project_id: project.id,
                task_count,
                completed_count,
                completion_percent: percent(completed_count, task_count),
            }
        })
        .collect()
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    // Round half up on integers: (200 * part + whole) / (2 * whole).
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::percent;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(4, 4), 100);
    }
}
