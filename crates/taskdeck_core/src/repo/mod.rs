//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Own the authoritative task and project collections.
//! - Define use-case oriented data access contracts.
//! - Stamp lifecycle timestamps through the injected clock.
//!
//! # Invariants
//! - Collections keep insertion order.
//! - Every read returns owned copies; callers never alias stored records.
//! - `NotFound` is the only error a repository raises.

pub mod project_repo;
pub mod task_repo;

use crate::clock::Clock;
use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use chrono::{Duration, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised when a mutation targets an id the store does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    TaskNotFound(TaskId),
    ProjectNotFound(ProjectId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Issues strictly increasing timestamps from a clock.
///
/// A clock that stands still (or moves backwards) still yields a stamp one
/// microsecond after the previous one.
pub(crate) struct Stamper {
    clock: Arc<dyn Clock>,
    last: Option<NaiveDateTime>,
}

impl Stamper {
    pub(crate) fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, last: None }
    }

    pub(crate) fn next(&mut self) -> NaiveDateTime {
        let now = self.clock.now();
        let stamp = match self.last {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last = Some(stamp);
        stamp
    }

    /// Makes sure later stamps come after `seen`, used when importing records.
    pub(crate) fn observe(&mut self, seen: NaiveDateTime) {
        if self.last.map_or(true, |last| seen > last) {
            self.last = Some(seen);
        }
    }
}
