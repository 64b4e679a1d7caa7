//! Field-presence-exact partial update for tasks.

use super::{TaskPriority, TaskStatus};
use chrono::NaiveDate;

/// Partial field set for a task update.
///
/// Presence, not truthiness, decides whether a field is touched: an absent
/// field leaves the stored value untouched, while a date field explicitly
/// set to `None` clears it. The two cases are modelled as the outer and
/// inner `Option` of the date fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    start_date: Option<Option<NaiveDate>>,
    end_date: Option<Option<NaiveDate>>,
    tags: Option<Vec<String>>,
}

impl TaskPatch {
    /// Creates an empty patch that touches nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            status: None,
            priority: None,
            start_date: None,
            end_date: None,
            tags: None,
        }
    }

    /// Creates the status-only patch issued by a kanban column drop.
    #[must_use]
    pub const fn move_to_status(status: TaskStatus) -> Self {
        let mut patch = Self::new();
        patch.status = Some(status);
        patch
    }

    /// Sets the title field.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description field.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status field.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority field.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the start date to a value (`Some`) or clears it (`None`).
    #[must_use]
    pub const fn with_start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the end date to a value (`Some`) or clears it (`None`).
    #[must_use]
    pub const fn with_end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the tags field.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Returns the patched title, if present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the patched description, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the patched status, if present.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the patched priority, if present.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the patched start date: `None` when absent, `Some(None)` to
    /// clear, `Some(Some(_))` to set.
    #[must_use]
    pub const fn start_date(&self) -> Option<Option<NaiveDate>> {
        self.start_date
    }

    /// Returns the patched end date with the same presence semantics as
    /// [`TaskPatch::start_date`].
    #[must_use]
    pub const fn end_date(&self) -> Option<Option<NaiveDate>> {
        self.end_date
    }

    /// Returns the patched tags, if present.
    #[must_use]
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Returns whether the patch touches no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.tags.is_none()
    }
}
