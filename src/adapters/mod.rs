//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event bus implementations
//! - `memory` - In-memory action plan store

pub mod events;
pub mod memory;

pub use events::InMemoryEventBus;
pub use memory::InMemoryActionPlanRepository;
