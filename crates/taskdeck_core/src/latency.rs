//! Response-latency scheduling hook.
//!
//! Services call [`LatencyHook::before_return`] right before handing a result
//! back. The default hook does nothing; [`SimulatedLatency`] sleeps so a demo
//! harness behaves like a remote API. Ordering and results never depend on it.

use std::collections::HashMap;
use std::time::Duration;

/// Operation names reported to the latency hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    TaskList,
    TaskGet,
    TaskCreate,
    TaskUpdate,
    TaskToggle,
    TaskDelete,
    TaskChildEdit,
    TaskSearch,
    TaskSuggest,
    ProjectList,
    ProjectGet,
    ProjectCreate,
    ProjectUpdate,
    ProjectDelete,
    DashboardStats,
    DashboardCharts,
    DashboardProgress,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskList => "task_list",
            Self::TaskGet => "task_get",
            Self::TaskCreate => "task_create",
            Self::TaskUpdate => "task_update",
            Self::TaskToggle => "task_toggle",
            Self::TaskDelete => "task_delete",
            Self::TaskChildEdit => "task_child_edit",
            Self::TaskSearch => "task_search",
            Self::TaskSuggest => "task_suggest",
            Self::ProjectList => "project_list",
            Self::ProjectGet => "project_get",
            Self::ProjectCreate => "project_create",
            Self::ProjectUpdate => "project_update",
            Self::ProjectDelete => "project_delete",
            Self::DashboardStats => "dashboard_stats",
            Self::DashboardCharts => "dashboard_charts",
            Self::DashboardProgress => "dashboard_progress",
        }
    }
}

/// Hook invoked once per completed service operation.
pub trait LatencyHook: Send + Sync {
    fn before_return(&self, operation: Operation);
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl LatencyHook for NoLatency {
    fn before_return(&self, _operation: Operation) {}
}

/// Blocks the calling thread for a per-operation delay.
#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    default_delay: Duration,
    overrides: HashMap<Operation, Duration>,
}

impl SimulatedLatency {
    /// Same delay for every operation.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            default_delay: delay,
            overrides: HashMap::new(),
        }
    }

    /// Delays matching the mock API the dashboard UI was built against.
    pub fn mock_api() -> Self {
        let table = [
            (Operation::TaskList, 300),
            (Operation::TaskGet, 200),
            (Operation::TaskCreate, 400),
            (Operation::TaskUpdate, 400),
            (Operation::TaskToggle, 300),
            (Operation::TaskDelete, 300),
            (Operation::TaskChildEdit, 200),
            (Operation::TaskSearch, 300),
            (Operation::TaskSuggest, 200),
            (Operation::ProjectList, 250),
            (Operation::ProjectGet, 200),
            (Operation::ProjectCreate, 350),
            (Operation::ProjectUpdate, 350),
            (Operation::ProjectDelete, 300),
            (Operation::DashboardStats, 400),
            (Operation::DashboardCharts, 300),
            (Operation::DashboardProgress, 300),
        ];
        Self {
            default_delay: Duration::ZERO,
            overrides: table
                .into_iter()
                .map(|(op, ms)| (op, Duration::from_millis(ms)))
                .collect(),
        }
    }

    /// Effective delay for `operation`.
    pub fn delay_for(&self, operation: Operation) -> Duration {
        self.overrides
            .get(&operation)
            .copied()
            .unwrap_or(self.default_delay)
    }
}

impl LatencyHook for SimulatedLatency {
    fn before_return(&self, operation: Operation) {
        let delay = self.delay_for(operation);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Operation, SimulatedLatency};
    use std::time::Duration;

    #[test]
    fn mock_api_table_matches_known_delays() {
        let latency = SimulatedLatency::mock_api();
        assert_eq!(
            latency.delay_for(Operation::TaskCreate),
            Duration::from_millis(400)
        );
        assert_eq!(
            latency.delay_for(Operation::ProjectList),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn uniform_applies_to_every_operation() {
        let latency = SimulatedLatency::uniform(Duration::from_millis(5));
        assert_eq!(
            latency.delay_for(Operation::DashboardCharts),
            Duration::from_millis(5)
        );
    }
}
