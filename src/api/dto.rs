//! Wire shapes for the task endpoints.
//!
//! Requests and responses use camelCase keys, SCREAMING_SNAKE_CASE enums,
//! `YYYY-MM-DD` date strings (or `null`) and RFC 3339 timestamps.

use crate::task::{
    domain::{NewTask, TaskPatch, TaskPriority, TaskStatus, WorkspaceId},
    services::TaskRecord,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Task as sent to clients, with the assignee denormalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Start date, or `null`.
    pub start_date: Option<NaiveDate>,
    /// End date, or `null`.
    pub end_date: Option<NaiveDate>,
    /// Ordered free-text tags.
    pub tags: Vec<String>,
    /// Owning user.
    pub assignee_id: uuid::Uuid,
    /// Workspace, or `null`.
    pub workspace_id: Option<uuid::Uuid>,
    /// Denormalized assignee display fields.
    pub assignee: AssigneeResponse,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Assignee fields embedded in every task response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssigneeResponse {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<TaskRecord> for TaskResponse {
    fn from(record: TaskRecord) -> Self {
        let TaskRecord { task, assignee } = record;
        Self {
            id: task.id().into_inner(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
            priority: task.priority(),
            start_date: task.start_date(),
            end_date: task.end_date(),
            tags: task.tags().to_vec(),
            assignee_id: task.assignee_id().into_inner(),
            workspace_id: task.workspace_id().map(WorkspaceId::into_inner),
            assignee: AssigneeResponse {
                name: assignee.name,
                email: assignee.email,
            },
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Initial status; defaults to `OPEN`.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Initial priority; defaults to `MEDIUM`.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Optional start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Optional end date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Ordered free-text tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional workspace.
    #[serde(default)]
    pub workspace_id: Option<uuid::Uuid>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(request: CreateTaskRequest) -> Self {
        let mut spec = Self::new(request.title)
            .with_description(request.description)
            .with_dates(request.start_date, request.end_date)
            .with_tags(request.tags);
        if let Some(status) = request.status {
            spec = spec.with_status(status);
        }
        if let Some(priority) = request.priority {
            spec = spec.with_priority(priority);
        }
        if let Some(workspace_id) = request.workspace_id {
            spec = spec.in_workspace(WorkspaceId::from_uuid(workspace_id));
        }
        spec
    }
}

/// Body of `PATCH /api/tasks/{id}`.
///
/// Field presence is significant: an absent key leaves the stored value
/// untouched, while a date key sent as `null` clears the date. The
/// double-`Option` deserializer keeps the two cases apart.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New title, when present.
    #[serde(default)]
    pub title: Option<String>,
    /// New description, when present.
    #[serde(default)]
    pub description: Option<String>,
    /// New status, when present.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// New priority, when present.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// New start date: absent keeps, `null` clears, a date sets.
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    /// New end date, with the same presence semantics as `start_date`.
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<NaiveDate>>,
    /// New tags, when present.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(request: UpdateTaskRequest) -> Self {
        let mut patch = Self::new();
        if let Some(title) = request.title {
            patch = patch.with_title(title);
        }
        if let Some(description) = request.description {
            patch = patch.with_description(description);
        }
        if let Some(status) = request.status {
            patch = patch.with_status(status);
        }
        if let Some(priority) = request.priority {
            patch = patch.with_priority(priority);
        }
        if let Some(start_date) = request.start_date {
            patch = patch.with_start_date(start_date);
        }
        if let Some(end_date) = request.end_date {
            patch = patch.with_end_date(end_date);
        }
        if let Some(tags) = request.tags {
            patch = patch.with_tags(tags);
        }
        patch
    }
}

/// Body of a successful `DELETE /api/tasks/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTaskResponse {
    /// Always `true`; the deleted record is not echoed back.
    pub success: bool,
}

/// Deserializes a present-but-possibly-`null` field into `Some(inner)`,
/// leaving `None` to `#[serde(default)]` for absent fields.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
