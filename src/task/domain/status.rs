//! Task status and priority enums with their transition and label tables.

use super::{ParseTaskPriorityError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
///
/// Variant order is the canonical kanban column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task is open and not yet started.
    Open,
    /// Task is being worked on.
    InProgress,
    /// Task work is finished.
    Completed,
    /// Task work is temporarily paused.
    Paused,
    /// Task has been cancelled.
    Cancelled,
}

/// Declared transition table: `TRANSITIONS[from][to]`.
///
/// Every transition is currently permitted, including re-opening a completed
/// task and dropping a card onto its own column. Ownership of the task is
/// the only mutation guard; tightening this graph later is a data change,
/// not a logic rewrite.
const TRANSITIONS: [[bool; TaskStatus::ALL.len()]; TaskStatus::ALL.len()] =
    [[true; TaskStatus::ALL.len()]; TaskStatus::ALL.len()];

impl TaskStatus {
    /// All statuses in kanban column order.
    pub const ALL: [Self; 5] = [
        Self::Open,
        Self::InProgress,
        Self::Completed,
        Self::Paused,
        Self::Cancelled,
    ];

    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Paused => "PAUSED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns the human-readable label used by kanban headers and CSV export.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Paused => "Paused",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns whether a task may move from `self` to `target`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        TRANSITIONS
            .get(self.index())
            .and_then(|row| row.get(target.index()))
            .copied()
            .unwrap_or(false)
    }

    const fn index(self) -> usize {
        match self {
            Self::Open => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
            Self::Paused => 3,
            Self::Cancelled => 4,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "OPEN" => Ok(Self::Open),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "PAUSED" => Ok(Self::Paused),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Must be handled first.
    High,
    /// Default priority.
    Medium,
    /// Can wait.
    Low,
}

impl TaskPriority {
    /// All priorities in descending urgency order.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Returns the human-readable label used by CSV export.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}
