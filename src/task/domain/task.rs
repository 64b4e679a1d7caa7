//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskPatch, TaskPriority, TaskStatus, UserId, WorkspaceId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task always has exactly one assignee and is only visible and mutable
/// through requests authenticated as that assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    tags: Vec<String>,
    assignee_id: UserId,
    workspace_id: Option<WorkspaceId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title; must not be empty after trimming.
    pub title: String,
    /// Task description; may be empty.
    pub description: String,
    /// Initial status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: TaskPriority,
    /// Optional start date. No ordering constraint against `end_date`.
    pub start_date: Option<NaiveDate>,
    /// Optional end date.
    pub end_date: Option<NaiveDate>,
    /// Ordered free-text tags.
    pub tags: Vec<String>,
    /// Workspace the task belongs to, when known.
    pub workspace_id: Option<WorkspaceId>,
}

impl NewTask {
    /// Creates a new-task payload with defaults matching the create form:
    /// `Open` status, `Medium` priority, no dates, no tags.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Open,
            priority: TaskPriority::Medium,
            start_date: None,
            end_date: None,
            tags: Vec::new(),
            workspace_id: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the start and end dates.
    #[must_use]
    pub const fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the workspace.
    #[must_use]
    pub const fn in_workspace(mut self, workspace_id: WorkspaceId) -> Self {
        self.workspace_id = Some(workspace_id);
        self
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted start date, if any.
    pub start_date: Option<NaiveDate>,
    /// Persisted end date, if any.
    pub end_date: Option<NaiveDate>,
    /// Persisted tags.
    pub tags: Vec<String>,
    /// Persisted assignee.
    pub assignee_id: UserId,
    /// Persisted workspace, if any.
    pub workspace_id: Option<WorkspaceId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task assigned to `assignee_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn create(
        spec: NewTask,
        assignee_id: UserId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = validated_title(spec.title)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title,
            description: spec.description,
            status: spec.status,
            priority: spec.priority,
            start_date: spec.start_date,
            end_date: spec.end_date,
            tags: spec.tags,
            assignee_id,
            workspace_id: spec.workspace_id,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            start_date: data.start_date,
            end_date: data.end_date,
            tags: data.tags,
            assignee_id: data.assignee_id,
            workspace_id: data.workspace_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the start date, if set.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the end date, if set.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the ordered tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the assignee identifier.
    #[must_use]
    pub const fn assignee_id(&self) -> UserId {
        self.assignee_id
    }

    /// Returns the workspace identifier, if any.
    #[must_use]
    pub const fn workspace_id(&self) -> Option<WorkspaceId> {
        self.workspace_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update to this task.
    ///
    /// Only fields present in the patch are touched; absent fields keep their
    /// previous values exactly. A date field patched to `None` is cleared.
    /// An empty patch still refreshes `updated_at`, matching a whole-record
    /// rewrite in storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when a patched title is empty
    /// after trimming, or [`TaskDomainError::InvalidStatusTransition`] when
    /// the transition table rejects a patched status.
    pub fn apply_patch(
        &mut self,
        patch: &TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if let Some(title) = patch.title() {
            let validated = validated_title(title.to_owned())?;
            self.title = validated;
        }
        if let Some(status) = patch.status() {
            if !self.status.can_transition_to(status) {
                return Err(TaskDomainError::InvalidStatusTransition {
                    task_id: self.id,
                    from: self.status,
                    to: status,
                });
            }
            self.status = status;
        }
        if let Some(description) = patch.description() {
            self.description = description.to_owned();
        }
        if let Some(priority) = patch.priority() {
            self.priority = priority;
        }
        if let Some(start_date) = patch.start_date() {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date() {
            self.end_date = end_date;
        }
        if let Some(tags) = patch.tags() {
            self.tags = tags.to_vec();
        }
        self.updated_at = clock.utc();
        Ok(())
    }
}

/// Validates and normalizes a task title.
fn validated_title(raw: String) -> Result<String, TaskDomainError> {
    if raw.trim().is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(raw)
}
