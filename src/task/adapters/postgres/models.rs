//! Diesel row models and domain conversions for TaskFlow persistence.

use super::schema::{tasks, users, workspaces};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, User, UserId, UserRole, Workspace, WorkspaceId},
    ports::{TaskRepositoryError, TaskRepositoryResult, UserRepositoryError, UserRepositoryResult},
};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query and insert model for task records.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Optional start date.
    pub start_date: Option<NaiveDate>,
    /// Optional end date.
    pub end_date: Option<NaiveDate>,
    /// Ordered free-text tags.
    pub tags: Vec<String>,
    /// Owning user.
    pub assignee_id: uuid::Uuid,
    /// Optional workspace.
    pub workspace_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Whole-record change set applied on update.
///
/// Every mutable column is written unconditionally: the gateway merges the
/// patch in the domain and persists the result as one atomic record write.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Optional start date.
    pub start_date: Option<NaiveDate>,
    /// Optional end date.
    pub end_date: Option<NaiveDate>,
    /// Ordered free-text tags.
    pub tags: Vec<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Converts a task aggregate to its row form.
#[must_use]
pub fn task_to_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        start_date: task.start_date(),
        end_date: task.end_date(),
        tags: task.tags().to_vec(),
        assignee_id: task.assignee_id().into_inner(),
        workspace_id: task.workspace_id().map(WorkspaceId::into_inner),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

/// Converts a task aggregate to the whole-record update change set.
#[must_use]
pub fn task_to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        start_date: task.start_date(),
        end_date: task.end_date(),
        tags: task.tags().to_vec(),
        updated_at: task.updated_at(),
    }
}

/// Reconstructs a task aggregate from its row form.
///
/// # Errors
///
/// Returns a persistence error when a stored status or priority string no
/// longer parses.
pub fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status,
        priority,
        start_date,
        end_date,
        tags,
        assignee_id,
        workspace_id,
        created_at,
        updated_at,
    } = row;

    let status = status
        .as_str()
        .try_into()
        .map_err(TaskRepositoryError::persistence)?;
    let priority = priority
        .as_str()
        .try_into()
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status,
        priority,
        start_date,
        end_date,
        tags,
        assignee_id: UserId::from_uuid(assignee_id),
        workspace_id: workspace_id.map(WorkspaceId::from_uuid),
        created_at,
        updated_at,
    }))
}

/// Query and insert model for user accounts.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Opaque password hash.
    pub password_hash: String,
    /// Account role.
    pub role: String,
}

/// Converts a user account to its row form.
#[must_use]
pub fn user_to_row(user: &User) -> UserRow {
    UserRow {
        id: user.id().into_inner(),
        name: user.name().to_owned(),
        email: user.email().to_owned(),
        password_hash: user.password_hash().to_owned(),
        role: user.role().as_str().to_owned(),
    }
}

/// Reconstructs a user account from its row form.
///
/// # Errors
///
/// Returns a persistence error when the stored role or email no longer
/// validates.
pub fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let role: UserRole = row
        .role
        .as_str()
        .try_into()
        .map_err(UserRepositoryError::persistence)?;
    let user = User::from_persisted(
        UserId::from_uuid(row.id),
        row.name,
        row.email,
        row.password_hash,
        role,
    );
    Ok(user)
}

/// Query and insert model for workspaces.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = workspaces)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkspaceRow {
    /// Workspace identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub owner_id: uuid::Uuid,
    /// Workspace name.
    pub name: String,
    /// Workspace description.
    pub description: String,
}

/// Converts a workspace to its row form.
#[must_use]
pub fn workspace_to_row(workspace: &Workspace) -> WorkspaceRow {
    WorkspaceRow {
        id: workspace.id().into_inner(),
        owner_id: workspace.owner_id().into_inner(),
        name: workspace.name().to_owned(),
        description: workspace.description().to_owned(),
    }
}

/// Reconstructs a workspace from its row form.
#[must_use]
pub fn row_to_workspace(row: WorkspaceRow) -> Workspace {
    Workspace::from_persisted(
        WorkspaceId::from_uuid(row.id),
        UserId::from_uuid(row.owner_id),
        row.name,
        row.description,
    )
}
