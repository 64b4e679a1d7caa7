//! Dashboard state container and its reducers.
//!
//! The state holds the session's task collection and a load phase. All
//! mutations are confirmation reducers: they run only after the gateway has
//! acknowledged the corresponding operation, so the collection never drifts
//! ahead of storage.

use crate::task::{domain::TaskId, services::TaskRecord};

/// Lifecycle of the initial collection fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// The initial fetch has not completed.
    #[default]
    Loading,
    /// The collection reflects the gateway.
    Ready,
    /// The initial fetch failed; the collection is empty.
    Failed,
}

/// Client-side task collection for one session.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    tasks: Vec<TaskRecord>,
    phase: LoadPhase,
    last_error: Option<String>,
}

impl DashboardState {
    /// Creates an empty state in the loading phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current collection, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Returns the load phase.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Returns the most recent operation failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the collection with a freshly fetched one.
    pub fn load_succeeded(&mut self, tasks: Vec<TaskRecord>) {
        self.tasks = tasks;
        self.phase = LoadPhase::Ready;
        self.last_error = None;
    }

    /// Marks the initial fetch as failed.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.tasks.clear();
        self.phase = LoadPhase::Failed;
        self.last_error = Some(message.into());
    }

    /// Prepends a confirmed new task, keeping newest-first order.
    pub fn create_succeeded(&mut self, record: TaskRecord) {
        self.tasks.insert(0, record);
        self.last_error = None;
    }

    /// Replaces the matching task in place, preserving collection order.
    ///
    /// A record whose id is no longer present is ignored: the task was
    /// deleted between the request and its confirmation.
    pub fn update_succeeded(&mut self, record: TaskRecord) {
        let id = record.task.id();
        if let Some(slot) = self.tasks.iter_mut().find(|entry| entry.task.id() == id) {
            *slot = record;
        }
        self.last_error = None;
    }

    /// Removes a confirmed-deleted task from the collection.
    pub fn delete_succeeded(&mut self, id: TaskId) {
        self.tasks.retain(|entry| entry.task.id() != id);
        self.last_error = None;
    }

    /// Records a failed operation without touching the collection.
    pub fn operation_failed(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }
}
