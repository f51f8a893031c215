//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event plumbing and error types
//! that form the vocabulary of the IAF dashboard rules.

mod command;
mod errors;
mod events;
mod ids;
mod percentage;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::ActionPlanId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
