//! Dashboard controller for TaskFlow clients.
//!
//! The dashboard owns the client-visible task collection for one session:
//! it fetches the collection once on load, mediates every mutation through
//! the task gateway before reflecting it locally (no optimistic updates),
//! and derives filtered views, kanban columns, aggregate statistics and CSV
//! exports as pure functions of the current collection.

mod client;
mod controller;
mod csv;
mod filter;
mod inprocess;
mod kanban;
mod state;
mod stats;

pub use client::{TaskApi, TaskApiError, TaskApiResult};
pub use controller::{DashboardController, TaskCommand};
pub use csv::{export_csv, export_file_name, CSV_HEADER};
pub use filter::{PriorityFilter, StatusFilter, TaskFilter};
pub use inprocess::InProcessTaskApi;
pub use kanban::{kanban_columns, KanbanColumn};
pub use state::{DashboardState, LoadPhase};
pub use stats::DashboardStats;

#[cfg(test)]
mod tests;
