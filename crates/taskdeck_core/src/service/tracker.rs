//! In-memory tracker: one independent store instance with its services.
//!
//! # Responsibility
//! - Construct task and project services over in-memory repositories that
//!   share one clock and one latency hook.
//! - Offer the cross-collection reads (task view, suggestions, dashboard,
//!   delete guard) that need both snapshots.
//!
//! # Invariants
//! - No process-wide state: every `Tracker` owns its own collections.

use crate::clock::{Clock, SystemClock};
use crate::latency::{LatencyHook, NoLatency};
use crate::model::project::ProjectId;
use crate::model::task::Task;
use crate::query::project_has_tasks;
use crate::query::task_view::{task_view, TaskViewQuery};
use crate::repo::project_repo::InMemoryProjectRepository;
use crate::repo::task_repo::InMemoryTaskRepository;
use crate::search::suggest::Suggestion;
use crate::seed::{Seed, SeedError};
use crate::service::dashboard_service::DashboardService;
use crate::service::project_service::ProjectService;
use crate::service::task_service::TaskService;
use log::info;
use std::sync::Arc;

pub type InMemoryTaskService = TaskService<InMemoryTaskRepository>;
pub type InMemoryProjectService = ProjectService<InMemoryProjectRepository>;

/// Task and project services over one in-memory store.
pub struct Tracker {
    tasks: InMemoryTaskService,
    projects: InMemoryProjectService,
    clock: Arc<dyn Clock>,
    latency: Arc<dyn LatencyHook>,
}

impl Tracker {
    /// Empty tracker on the system clock without latency.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(NoLatency))
    }

    /// Empty tracker with explicit clock and latency hook.
    pub fn new(clock: Arc<dyn Clock>, latency: Arc<dyn LatencyHook>) -> Self {
        Self::from_parts(
            InMemoryTaskRepository::new(Arc::clone(&clock)),
            InMemoryProjectRepository::new(Arc::clone(&clock)),
            clock,
            latency,
        )
    }

    /// Tracker pre-populated from `seed`.
    pub fn with_seed(
        seed: Seed,
        clock: Arc<dyn Clock>,
        latency: Arc<dyn LatencyHook>,
    ) -> Result<Self, SeedError> {
        seed.validate()?;
        info!(
            "event=tracker_seed module=tracker status=ok projects={} tasks={}",
            seed.projects.len(),
            seed.tasks.len()
        );
        Ok(Self::from_parts(
            InMemoryTaskRepository::with_tasks(Arc::clone(&clock), seed.tasks),
            InMemoryProjectRepository::with_projects(Arc::clone(&clock), seed.projects),
            clock,
            latency,
        ))
    }

    fn from_parts(
        task_repo: InMemoryTaskRepository,
        project_repo: InMemoryProjectRepository,
        clock: Arc<dyn Clock>,
        latency: Arc<dyn LatencyHook>,
    ) -> Self {
        Self {
            tasks: TaskService::with_latency(task_repo, Arc::clone(&latency)),
            projects: ProjectService::with_latency(project_repo, Arc::clone(&latency)),
            clock,
            latency,
        }
    }

    pub fn tasks(&self) -> &InMemoryTaskService {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut InMemoryTaskService {
        &mut self.tasks
    }

    pub fn projects(&self) -> &InMemoryProjectService {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut InMemoryProjectService {
        &mut self.projects
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Dashboard over the current collections.
    pub fn dashboard(
        &self,
    ) -> DashboardService<'_, InMemoryTaskRepository, InMemoryProjectRepository> {
        DashboardService::with_latency(
            &self.tasks,
            &self.projects,
            Arc::clone(&self.clock),
            Arc::clone(&self.latency),
        )
    }

    /// Filtered, searched and sorted task list.
    pub fn task_view(&self, query: &TaskViewQuery) -> Vec<Task> {
        task_view(
            &self.tasks.list_tasks(),
            &self.projects.list_projects(),
            query,
        )
    }

    /// Autocomplete suggestions against current tasks and projects.
    pub fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        let projects = self.projects.list_projects();
        self.tasks.suggestions(query, &projects)
    }

    /// Whether deleting `project_id` is allowed (no task references it).
    pub fn can_delete_project(&self, project_id: ProjectId) -> bool {
        !project_has_tasks(project_id, &self.tasks.list_tasks())
    }
}
