//! Task store gateway: ownership-enforcing CRUD over the repositories.
//!
//! Every operation takes the already-authenticated caller. Unauthenticated
//! requests are rejected at the boundary (HTTP extractor or in-process
//! client) before any storage access; the gateway itself never sees them.

use crate::task::{
    domain::{AssigneeProfile, NewTask, Task, TaskDomainError, TaskId, TaskPatch, UserId},
    ports::{TaskRepository, TaskRepositoryError, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// A task enriched with the assignee's display name and email, the shape
/// every gateway operation returns to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// The task aggregate.
    pub task: Task,
    /// Denormalized assignee fields.
    pub assignee: AssigneeProfile,
}

/// Service-level errors for gateway operations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The task does not exist or is not owned by the caller. The two cases
    /// are collapsed so existence is never leaked.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Domain validation rejected the request.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Unclassified persistence failure. The raw cause is for server-side
    /// logs only; clients receive a generic message.
    #[error("storage failure: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl From<TaskRepositoryError> for GatewayError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::DuplicateTask(_) => Self::Storage(Arc::new(err)),
            TaskRepositoryError::Persistence(source) => Self::Storage(source),
        }
    }
}

impl From<UserRepositoryError> for GatewayError {
    fn from(err: UserRepositoryError) -> Self {
        // A missing assignee row is a referential-integrity failure, not a
        // client-visible NotFound.
        match err {
            UserRepositoryError::Persistence(source) => Self::Storage(source),
            UserRepositoryError::DuplicateEmail(_) | UserRepositoryError::NotFound(_) => {
                Self::Storage(Arc::new(err))
            }
        }
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Ownership-enforcing task gateway.
#[derive(Debug)]
pub struct TaskGateway<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

// Hand-written so cloning never requires the repositories to be `Clone`.
impl<R, U, C> Clone for TaskGateway<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, U, C> TaskGateway<R, U, C>
where
    R: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new gateway over the given repositories and clock.
    #[must_use]
    pub const fn new(tasks: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            clock,
        }
    }

    /// Creates a task assigned to the caller.
    ///
    /// The server assigns the identifier and both timestamps; the creator is
    /// always the assignee.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Domain`] when validation fails or
    /// [`GatewayError::Storage`] when persistence fails.
    pub async fn create_task(&self, caller: UserId, spec: NewTask) -> GatewayResult<TaskRecord> {
        let task = Task::create(spec, caller, &*self.clock)?;
        self.tasks.store(&task).await?;
        let assignee = self.assignee_profile(caller).await?;
        Ok(TaskRecord { task, assignee })
    }

    /// Lists the caller's tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Storage`] when persistence fails.
    pub async fn list_tasks(&self, caller: UserId) -> GatewayResult<Vec<TaskRecord>> {
        let tasks = self.tasks.list_for_assignee(caller).await?;
        if tasks.is_empty() {
            return Ok(Vec::new());
        }
        // All listed tasks share the caller as assignee.
        let assignee = self.assignee_profile(caller).await?;
        Ok(tasks
            .into_iter()
            .map(|task| TaskRecord {
                task,
                assignee: assignee.clone(),
            })
            .collect())
    }

    /// Applies a partial update to a task owned by the caller.
    ///
    /// The patched record is persisted as a single whole-record write and
    /// returned enriched with the assignee profile.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the id is unknown or the task
    /// belongs to another user, [`GatewayError::Domain`] when the patch
    /// fails validation, or [`GatewayError::Storage`] on persistence
    /// failure.
    pub async fn update_task(
        &self,
        caller: UserId,
        id: TaskId,
        patch: &TaskPatch,
    ) -> GatewayResult<TaskRecord> {
        let mut task = self
            .tasks
            .find_owned(id, caller)
            .await?
            .ok_or(GatewayError::NotFound(id))?;
        task.apply_patch(patch, &*self.clock)?;
        self.tasks.update(&task).await?;
        let assignee = self.assignee_profile(caller).await?;
        Ok(TaskRecord { task, assignee })
    }

    /// Permanently deletes a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the id is unknown or the task
    /// belongs to another user, or [`GatewayError::Storage`] on persistence
    /// failure.
    pub async fn delete_task(&self, caller: UserId, id: TaskId) -> GatewayResult<()> {
        self.tasks
            .find_owned(id, caller)
            .await?
            .ok_or(GatewayError::NotFound(id))?;
        self.tasks.delete(id).await?;
        Ok(())
    }

    async fn assignee_profile(&self, user_id: UserId) -> GatewayResult<AssigneeProfile> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserRepositoryError::NotFound(user_id))?;
        Ok(user.profile())
    }
}
