//! Kanban grouping of the dashboard collection.

use crate::task::{domain::TaskStatus, services::TaskRecord};

/// One kanban column: a status and the visible tasks in it, preserving the
/// collection's newest-first order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanbanColumn<'a> {
    /// The column's status.
    pub status: TaskStatus,
    /// Tasks currently in that status.
    pub tasks: Vec<&'a TaskRecord>,
}

/// Groups `records` into one column per status, in canonical status order.
///
/// Every status gets a column even when empty, so the board layout is
/// stable across refreshes.
#[must_use]
pub fn kanban_columns<'a, I>(records: I) -> Vec<KanbanColumn<'a>>
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    let mut columns: Vec<KanbanColumn<'a>> = TaskStatus::ALL
        .iter()
        .map(|&status| KanbanColumn {
            status,
            tasks: Vec::new(),
        })
        .collect();
    for record in records {
        if let Some(column) = columns
            .iter_mut()
            .find(|column| column.status == record.task.status())
        {
            column.tasks.push(record);
        }
    }
    columns
}
