//! Project repository contract and in-memory implementation.
//!
//! # Invariants
//! - Project ids are unique for the repository lifetime.
//! - `delete_project` is unconditional. Refusing to delete a project that
//!   still has tasks is the caller's job (see `query::project_has_tasks`).

use crate::clock::Clock;
use crate::model::project::{NewProject, Project, ProjectId, ProjectPatch};
use crate::repo::{RepoError, RepoResult, Stamper};
use std::sync::Arc;
use uuid::Uuid;

/// Repository interface for project storage.
pub trait ProjectRepository {
    /// All projects in insertion order.
    fn list_projects(&self) -> Vec<Project>;
    fn get_project(&self, id: ProjectId) -> Option<Project>;
    fn create_project(&mut self, request: NewProject) -> Project;
    fn update_project(&mut self, id: ProjectId, patch: ProjectPatch) -> RepoResult<Project>;
    fn delete_project(&mut self, id: ProjectId) -> RepoResult<()>;
}

/// Insertion-ordered project collection.
pub struct InMemoryProjectRepository {
    projects: Vec<Project>,
    stamper: Stamper,
}

impl InMemoryProjectRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            projects: Vec::new(),
            stamper: Stamper::new(clock),
        }
    }

    /// Builds a repository holding already-identified projects.
    pub fn with_projects(clock: Arc<dyn Clock>, projects: Vec<Project>) -> Self {
        let mut repo = Self::new(clock);
        for project in projects {
            repo.stamper.observe(project.created_at);
            repo.projects.push(project);
        }
        repo
    }

    fn position(&self, id: ProjectId) -> RepoResult<usize> {
        self.projects
            .iter()
            .position(|project| project.id == id)
            .ok_or(RepoError::ProjectNotFound(id))
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn list_projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn get_project(&self, id: ProjectId) -> Option<Project> {
        self.projects
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }

    fn create_project(&mut self, request: NewProject) -> Project {
        let project = Project {
            id: Uuid::new_v4(),
            name: request.name,
            color: request.color,
            icon: request.icon,
            created_at: self.stamper.next(),
        };
        self.projects.push(project.clone());
        project
    }

    fn update_project(&mut self, id: ProjectId, patch: ProjectPatch) -> RepoResult<Project> {
        let index = self.position(id)?;
        let project = &mut self.projects[index];
        patch.apply(project);
        Ok(project.clone())
    }

    fn delete_project(&mut self, id: ProjectId) -> RepoResult<()> {
        let index = self.position(id)?;
        self.projects.remove(index);
        Ok(())
    }
}
