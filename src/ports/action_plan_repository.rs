//! Action plan repository port.
//!
//! The store owns the collection of committed plans. The rules never
//! hold it; handlers load, validate or derive, and hand results back here.
//!
//! # Design
//!
//! - **Store-assigned ids**: `next_id` reserves the next unused integer
//! - **Never reused**: ids stay retired after `delete`
//! - **Ordered reads**: `find_all` returns plans by ascending id

use crate::domain::action_plan::ActionPlan;
use crate::domain::foundation::{ActionPlanId, DomainError};
use async_trait::async_trait;

/// Repository port for action plan persistence.
#[async_trait]
pub trait ActionPlanRepository: Send + Sync {
    /// Reserve the id for a plan about to be created.
    ///
    /// Every call returns a new id, whether or not a plan is saved under it.
    async fn next_id(&self) -> Result<ActionPlanId, DomainError>;

    /// Save a new plan.
    ///
    /// # Errors
    ///
    /// - `DuplicateActionPlan` if the id is already stored
    /// - `StorageError` on persistence failure
    async fn save(&self, plan: &ActionPlan) -> Result<(), DomainError>;

    /// Replace an existing plan.
    ///
    /// # Errors
    ///
    /// - `ActionPlanNotFound` if no plan has this id
    /// - `StorageError` on persistence failure
    async fn update(&self, plan: &ActionPlan) -> Result<(), DomainError>;

    /// Find a plan by id. Returns `None` if not found.
    async fn find_by_id(&self, id: ActionPlanId) -> Result<Option<ActionPlan>, DomainError>;

    /// All plans, ordered by id.
    async fn find_all(&self) -> Result<Vec<ActionPlan>, DomainError>;

    /// Remove a plan.
    ///
    /// # Errors
    ///
    /// - `ActionPlanNotFound` if no plan has this id
    async fn delete(&self, id: ActionPlanId) -> Result<(), DomainError>;
}

/// Error for an id the store does not hold, with the id as a detail.
pub fn action_plan_not_found(id: ActionPlanId) -> DomainError {
    DomainError::new(
        crate::domain::foundation::ErrorCode::ActionPlanNotFound,
        format!("Action plan {} not found", id),
    )
    .with_detail("id", id.to_string())
}
