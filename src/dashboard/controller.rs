//! Dashboard controller: command dispatch over the client port.

use super::{
    client::{TaskApi, TaskApiResult},
    csv::export_csv,
    filter::TaskFilter,
    kanban::{kanban_columns, KanbanColumn},
    state::DashboardState,
    stats::DashboardStats,
};
use crate::task::{
    domain::{NewTask, TaskId, TaskPatch, TaskStatus},
    services::TaskRecord,
};

/// A mutation requested by the user interface.
///
/// Drag-and-drop between kanban columns is expressed as
/// [`TaskCommand::MoveToStatus`], which dispatch lowers to a status-only
/// patch; the board re-renders from confirmed state rather than moving the
/// card speculatively.
#[derive(Debug, Clone)]
pub enum TaskCommand {
    /// Create a task assigned to the session user.
    Create(NewTask),
    /// Apply a partial update to a task.
    Update(TaskId, TaskPatch),
    /// Permanently delete a task.
    Delete(TaskId),
    /// Move a task to a status (kanban drag-and-drop).
    MoveToStatus(TaskId, TaskStatus),
}

/// Owns the session's [`DashboardState`] and mediates every mutation
/// through the gateway before reflecting it locally.
pub struct DashboardController<A: TaskApi> {
    api: A,
    state: DashboardState,
}

impl<A: TaskApi> DashboardController<A> {
    /// Creates a controller with an empty, loading state.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: DashboardState::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Performs the initial collection fetch.
    ///
    /// # Errors
    ///
    /// Propagates the gateway error; the state records the failure and the
    /// collection stays empty.
    pub async fn load(&mut self) -> TaskApiResult<()> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                self.state.load_succeeded(tasks);
                Ok(())
            }
            Err(err) => {
                self.state.load_failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Dispatches a command, updating local state only on confirmation.
    ///
    /// # Errors
    ///
    /// Propagates the gateway error; a failed command leaves the collection
    /// exactly as it was.
    pub async fn dispatch(&mut self, command: TaskCommand) -> TaskApiResult<()> {
        let outcome = match command {
            TaskCommand::Create(spec) => self
                .api
                .create_task(spec)
                .await
                .map(|record| self.state.create_succeeded(record)),
            TaskCommand::Update(id, patch) => self
                .api
                .update_task(id, &patch)
                .await
                .map(|record| self.state.update_succeeded(record)),
            TaskCommand::MoveToStatus(id, status) => {
                let patch = TaskPatch::move_to_status(status);
                self.api
                    .update_task(id, &patch)
                    .await
                    .map(|record| self.state.update_succeeded(record))
            }
            TaskCommand::Delete(id) => self
                .api
                .delete_task(id)
                .await
                .map(|()| self.state.delete_succeeded(id)),
        };
        if let Err(err) = &outcome {
            self.state.operation_failed(err.to_string());
        }
        outcome
    }

    /// Returns the tasks passing `filter`, in collection order.
    #[must_use]
    pub fn visible_tasks(&self, filter: &TaskFilter) -> Vec<&TaskRecord> {
        filter.apply(self.state.tasks())
    }

    /// Returns the kanban board derived from the tasks passing `filter`.
    #[must_use]
    pub fn board(&self, filter: &TaskFilter) -> Vec<KanbanColumn<'_>> {
        kanban_columns(self.visible_tasks(filter))
    }

    /// Returns aggregate statistics over the full, unfiltered collection.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(self.state.tasks())
    }

    /// Renders the full, unfiltered collection as a CSV document.
    #[must_use]
    pub fn export(&self) -> String {
        export_csv(self.state.tasks())
    }
}
