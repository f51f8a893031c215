//! Action plan module - Remediation records for indicator shortfalls.
//!
//! - `ActionPlanValidator` checks drafts before anything is committed
//! - `ActionPlanLifecycle` derives status and applies progress rules
//! - `ActionPlanSummary` aggregates the portfolio for the overview

mod draft;
mod errors;
mod events;
mod lifecycle;
mod owner;
mod plan;
mod status;
mod summary;
mod validator;

pub use draft::ActionPlanDraft;
pub use errors::ActionPlanError;
pub use events::{ActionPlanCreated, ActionPlanMarkedOverdue, ActionPlanUpdated};
pub use lifecycle::{ActionPlanLifecycle, ProgressPolicy};
pub use owner::{owner_display_name, Owner};
pub use plan::ActionPlan;
pub use status::PlanStatus;
pub use summary::ActionPlanSummary;
pub use validator::{
    ActionPlanValidator, FieldErrorKind, FieldErrors, FieldName, ValidatedActionPlan,
};
