//! Orchestration services for the task store gateway.

mod gateway;

pub use gateway::{GatewayError, GatewayResult, TaskGateway, TaskRecord};
