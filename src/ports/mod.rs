//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the rules and the host. Adapters implement these ports.
//!
//! - `ActionPlanRepository` - Store that owns committed action plans
//! - `EventPublisher` - Port for publishing domain events

mod action_plan_repository;
mod event_publisher;

pub use action_plan_repository::{action_plan_not_found, ActionPlanRepository};
pub use event_publisher::EventPublisher;
