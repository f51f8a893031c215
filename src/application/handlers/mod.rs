//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod action_plan;

pub use action_plan::{
    CreateActionPlanCommand, CreateActionPlanHandler, CreateActionPlanResult,
    DeleteActionPlanCommand, DeleteActionPlanHandler, GetActionPlanSummaryHandler,
    GetActionPlanSummaryQuery, RefreshActionPlanStatusesHandler, RefreshActionPlanStatusesResult,
    UpdateActionPlanCommand, UpdateActionPlanHandler, UpdateActionPlanResult,
};
