//! Initial store contents.
//!
//! # Responsibility
//! - Decode seed JSON (camelCase record shape) into tasks and projects.
//! - Reject seeds that would break id uniqueness.
//!
//! # Invariants
//! - Timestamps are naive local date-times (`2024-03-01T09:00:00`).

use crate::model::project::Project;
use crate::model::task::Task;
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Seed decode/validation failure.
#[derive(Debug)]
pub enum SeedError {
    Json(serde_json::Error),
    DuplicateTaskId(Uuid),
    DuplicateProjectId(Uuid),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid seed json: {err}"),
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id in seed: {id}"),
            Self::DuplicateProjectId(id) => write!(f, "duplicate project id in seed: {id}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::DuplicateTaskId(_) | Self::DuplicateProjectId(_) => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Records a store starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Seed {
    /// Decodes `{"projects": [...], "tasks": [...]}` and validates ids.
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks that task ids and project ids are unique.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id) {
                return Err(SeedError::DuplicateProjectId(project.id));
            }
        }
        let mut task_ids = HashSet::new();
        for task in &self.tasks {
            if !task_ids.insert(task.id) {
                return Err(SeedError::DuplicateTaskId(task.id));
            }
        }
        Ok(())
    }
}
