//! Dashboard use-case service.
//!
//! Reads fresh task and project snapshots on every call and derives counters,
//! charts and project progress from them at the clock's current time.

use crate::clock::Clock;
use crate::latency::{LatencyHook, NoLatency, Operation};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::TaskRepository;
use crate::service::project_service::ProjectService;
use crate::service::task_service::TaskService;
use crate::stats::dashboard::{
    chart_data, compute_stats, project_progress, ChartData, DashboardStats, ProjectProgress,
};
use log::debug;
use std::sync::Arc;

/// Read-only view over the task and project services.
pub struct DashboardService<'a, T: TaskRepository, P: ProjectRepository> {
    tasks: &'a TaskService<T>,
    projects: &'a ProjectService<P>,
    clock: Arc<dyn Clock>,
    latency: Arc<dyn LatencyHook>,
}

impl<'a, T: TaskRepository, P: ProjectRepository> DashboardService<'a, T, P> {
    pub fn new(
        tasks: &'a TaskService<T>,
        projects: &'a ProjectService<P>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_latency(tasks, projects, clock, Arc::new(NoLatency))
    }

    pub fn with_latency(
        tasks: &'a TaskService<T>,
        projects: &'a ProjectService<P>,
        clock: Arc<dyn Clock>,
        latency: Arc<dyn LatencyHook>,
    ) -> Self {
        Self {
            tasks,
            projects,
            clock,
            latency,
        }
    }

    /// Counters computed against the current snapshots.
    pub fn stats(&self) -> DashboardStats {
        let tasks = self.tasks.list_tasks();
        let projects = self.projects.list_projects();
        let stats = compute_stats(&tasks, &projects, self.clock.now());
        debug!(
            "event=dashboard_stats module=dashboard_service status=ok total={} overdue={}",
            stats.total_tasks, stats.overdue_tasks
        );
        self.latency.before_return(Operation::DashboardStats);
        stats
    }

    /// Completion and priority chart series.
    pub fn chart_data(&self) -> ChartData {
        let charts = chart_data(&self.stats());
        self.latency.before_return(Operation::DashboardCharts);
        charts
    }

    /// Per-project completion progress.
    pub fn project_progress(&self) -> Vec<ProjectProgress> {
        let tasks = self.tasks.list_tasks();
        let projects = self.projects.list_projects();
        let progress = project_progress(&tasks, &projects);
        self.latency.before_return(Operation::DashboardProgress);
        progress
    }
}
