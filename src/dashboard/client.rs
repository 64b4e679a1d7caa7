//! Client-side port for the task gateway.

use crate::task::{
    domain::{NewTask, TaskId, TaskPatch},
    services::TaskRecord,
};
use async_trait::async_trait;
use thiserror::Error;

/// Errors a dashboard sees when talking to the task gateway.
///
/// Transport and storage failures are collapsed into [`TaskApiError::Failed`]
/// with an operator-facing message; the dashboard only needs to surface a
/// generic failure indicator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskApiError {
    /// The session is missing or no longer valid.
    #[error("not authenticated")]
    Unauthorized,

    /// The task does not exist or belongs to another user.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The gateway rejected the request as invalid.
    #[error("invalid request: {0}")]
    Invalid(String),

    /// The gateway or the transport to it failed.
    #[error("request failed: {0}")]
    Failed(String),
}

/// Result type for client-side gateway calls.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// The gateway surface a dashboard depends on.
///
/// Implementations carry their own session context; callers never pass
/// credentials per operation.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetches the caller's full task collection, newest first.
    async fn list_tasks(&self) -> TaskApiResult<Vec<TaskRecord>>;

    /// Creates a task assigned to the caller.
    async fn create_task(&self, spec: NewTask) -> TaskApiResult<TaskRecord>;

    /// Applies a partial update to one of the caller's tasks.
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> TaskApiResult<TaskRecord>;

    /// Permanently deletes one of the caller's tasks.
    async fn delete_task(&self, id: TaskId) -> TaskApiResult<()>;
}
