//! Unit tests for the dashboard module.
//!
//! Tests are organised by concern: state reducers, derived views (filter,
//! kanban, statistics, CSV) and controller command dispatch.
