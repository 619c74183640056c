//! Project use-case service.
//!
//! Deleting a project that still has tasks is refused by the presentation
//! layer (`query::project_has_tasks`), not here.

use crate::latency::{LatencyHook, NoLatency, Operation};
use crate::model::project::{NewProject, Project, ProjectId, ProjectPatch};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::RepoResult;
use log::{debug, warn};
use std::sync::Arc;

/// Project service facade over a repository implementation.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
    latency: Arc<dyn LatencyHook>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_latency(repo, Arc::new(NoLatency))
    }

    pub fn with_latency(repo: R, latency: Arc<dyn LatencyHook>) -> Self {
        Self { repo, latency }
    }

    pub fn list_projects(&self) -> Vec<Project> {
        let projects = self.repo.list_projects();
        self.finish(Operation::ProjectList, projects)
    }

    pub fn get_project(&self, id: ProjectId) -> Option<Project> {
        let project = self.repo.get_project(id);
        self.finish(Operation::ProjectGet, project)
    }

    pub fn create_project(&mut self, request: NewProject) -> Project {
        let project = self.repo.create_project(request);
        debug!(
            "event=project_create module=project_service status=ok project_id={}",
            project.id
        );
        self.finish(Operation::ProjectCreate, project)
    }

    pub fn update_project(&mut self, id: ProjectId, patch: ProjectPatch) -> RepoResult<Project> {
        let result = self.repo.update_project(id, patch);
        match &result {
            Ok(_) => debug!(
                "event=project_update module=project_service status=ok project_id={id}"
            ),
            Err(err) => warn!(
                "event=project_update module=project_service status=error error={err}"
            ),
        }
        self.finish(Operation::ProjectUpdate, result)
    }

    /// Removes the project unconditionally; referencing tasks keep a dangling
    /// `project_id`.
    pub fn delete_project(&mut self, id: ProjectId) -> RepoResult<()> {
        let result = self.repo.delete_project(id);
        match &result {
            Ok(()) => debug!(
                "event=project_delete module=project_service status=ok project_id={id}"
            ),
            Err(err) => warn!(
                "event=project_delete module=project_service status=error error={err}"
            ),
        }
        self.finish(Operation::ProjectDelete, result)
    }

    fn finish<T>(&self, operation: Operation, value: T) -> T {
        self.latency.before_return(operation);
        value
    }
}
