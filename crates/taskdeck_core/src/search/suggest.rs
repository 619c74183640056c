//! Autocomplete suggestions over task titles, descriptions and project names.
//!
//! # Invariants
//! - Queries shorter than [`MIN_QUERY_CHARS`] (after trim) yield nothing.
//! - Discovery order is titles, then descriptions, then project names.
//! - Text is de-duplicated by case-insensitive exact equality.
//! - At most [`MAX_SUGGESTIONS`] entries are returned.

use crate::model::project::Project;
use crate::model::task::Task;
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_SUGGESTIONS: usize = 8;
const DESCRIPTION_PREVIEW_CHARS: usize = 50;
const UNKNOWN_PROJECT_NAME: &str = "Unknown Project";

/// Where a suggestion was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Task,
    Description,
    Project,
}

/// Ranked autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Task id for task/description hits, project id for project hits.
    pub source_id: Uuid,
    pub kind: SuggestionKind,
    pub text: String,
    pub subtitle: String,
}

/// Returns up to [`MAX_SUGGESTIONS`] suggestions for `query`.
pub fn suggest(query: &str, tasks: &[Task], projects: &[Project]) -> Vec<Suggestion> {
    let term = query.trim().to_lowercase();
    if term.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut collector = Collector::default();

    for task in tasks {
        if task.title.to_lowercase().contains(&term) {
            let project_name = projects
                .iter()
                .find(|project| project.id == task.project_id)
                .map_or(UNKNOWN_PROJECT_NAME, |project| project.name.as_str());
            collector.push_unique(
                &task.title,
                Suggestion {
                    source_id: task.id,
                    kind: SuggestionKind::Task,
                    text: task.title.clone(),
                    subtitle: format!("in {project_name}"),
                },
            );
        }
    }

    for task in tasks {
        if collector.is_full() {
            break;
        }
        if task.description.to_lowercase().contains(&term) {
            collector.push_unique(
                &task.description,
                Suggestion {
                    source_id: task.id,
                    kind: SuggestionKind::Description,
                    text: truncate_preview(&task.description),
                    subtitle: format!("from \"{}\"", task.title),
                },
            );
        }
    }

    for project in projects {
        if collector.is_full() {
            break;
        }
        if project.name.to_lowercase().contains(&term) {
            collector.push_unique(
                &project.name,
                Suggestion {
                    source_id: project.id,
                    kind: SuggestionKind::Project,
                    text: project.name.clone(),
                    subtitle: "Project".to_string(),
                },
            );
        }
    }

    let mut suggestions = collector.items;
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[derive(Default)]
struct Collector {
    items: Vec<Suggestion>,
    seen: HashSet<String>,
}

impl Collector {
    fn is_full(&self) -> bool {
        self.items.len() >= MAX_SUGGESTIONS
    }

    /// Keys on the full source text, even when the display text is truncated.
    fn push_unique(&mut self, source_text: &str, suggestion: Suggestion) {
        if self.seen.insert(source_text.to_lowercase()) {
            self.items.push(suggestion);
        }
    }
}

fn truncate_preview(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
