//! Task store gateway for TaskFlow.
//!
//! This module implements the server side of the task lifecycle: creating
//! tasks for the calling user, listing the caller's collection, applying
//! field-presence-exact partial updates, and deleting tasks, with every
//! mutation gated by an ownership check (caller == assignee). The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
