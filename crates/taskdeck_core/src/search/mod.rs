//! Text search entry points.
//!
//! # Responsibility
//! - Case-insensitive substring matching shared by list views and search.
//! - Keyword search over task titles/descriptions.
//! - Autocomplete suggestions (see [`suggest`]).

pub mod suggest;

use crate::model::task::Task;

/// Case-insensitive substring test. An empty needle always matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Tasks whose title or description contains `query`.
///
/// The query is trimmed first; a blank query returns every task.
pub fn search_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let term = query.trim();
    if term.is_empty() {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .filter(|task| {
            contains_ignore_case(&task.title, term) || contains_ignore_case(&task.description, term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::contains_ignore_case;

    #[test]
    fn contains_ignore_case_matches_mixed_case() {
        assert!(contains_ignore_case("Team Meeting", "MEET"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Team", "teams"));
    }
}
