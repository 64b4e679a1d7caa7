//! Aggregate statistics over the dashboard collection.

use crate::task::{domain::TaskStatus, services::TaskRecord};

/// Counts and completion rate derived from the full (unfiltered) collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Total number of tasks.
    pub total: usize,
    /// Tasks in `COMPLETED`.
    pub completed: usize,
    /// Tasks in `IN_PROGRESS`.
    pub in_progress: usize,
    /// Tasks in `OPEN`.
    pub open: usize,
    /// Tasks in `PAUSED`.
    pub paused: usize,
    /// Tasks in `CANCELLED`.
    pub cancelled: usize,
    /// Completed share of the collection, rounded to the nearest whole
    /// percent. Zero for an empty collection.
    pub completion_rate: u8,
}

impl DashboardStats {
    /// Computes statistics for `records`.
    #[must_use]
    pub fn compute(records: &[TaskRecord]) -> Self {
        let total = records.len();
        let count = |status: TaskStatus| {
            records
                .iter()
                .filter(|record| record.task.status() == status)
                .count()
        };
        let completed = count(TaskStatus::Completed);
        Self {
            total,
            completed,
            in_progress: count(TaskStatus::InProgress),
            open: count(TaskStatus::Open),
            paused: count(TaskStatus::Paused),
            cancelled: count(TaskStatus::Cancelled),
            completion_rate: completion_rate(completed, total),
        }
    }
}

/// Rounds `100 * completed / total` to the nearest whole percent.
fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rate = (100 * completed + total / 2) / total;
    u8::try_from(rate).unwrap_or(100)
}
