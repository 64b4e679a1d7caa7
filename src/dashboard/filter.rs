//! Conjunctive filtering over the dashboard collection.

use crate::task::{
    domain::{TaskPriority, TaskStatus},
    services::TaskRecord,
};

/// Status dimension of a filter: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    All,
    /// Only tasks in the given status.
    Only(TaskStatus),
}

/// Priority dimension of a filter: everything, or one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    /// No priority restriction.
    #[default]
    All,
    /// Only tasks with the given priority.
    Only(TaskPriority),
}

/// Conjunctive view filter. A task is visible only when every dimension
/// matches; the default filter shows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    search: String,
    status: StatusFilter,
    priority: PriorityFilter,
}

impl TaskFilter {
    /// Creates a filter that shows every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the view to tasks whose title, description or assignee
    /// name contains `search`, case-insensitively. A blank search matches
    /// everything.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts the view along the status dimension.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Restricts the view along the priority dimension.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Returns whether `record` passes every dimension of this filter.
    #[must_use]
    pub fn matches(&self, record: &TaskRecord) -> bool {
        self.matches_search(record) && self.matches_status(record) && self.matches_priority(record)
    }

    /// Returns the records passing the filter, in their collection order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [TaskRecord]) -> Vec<&'a TaskRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    fn matches_search(&self, record: &TaskRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        record.task.title().to_lowercase().contains(&needle)
            || record.task.description().to_lowercase().contains(&needle)
            || record.assignee.name.to_lowercase().contains(&needle)
    }

    fn matches_status(&self, record: &TaskRecord) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.task.status() == status,
        }
    }

    fn matches_priority(&self, record: &TaskRecord) -> bool {
        match self.priority {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => record.task.priority() == priority,
        }
    }
}
