//! In-memory storage adapters.

mod in_memory_action_plan_repository;

pub use in_memory_action_plan_repository::InMemoryActionPlanRepository;
