//! Action plan command and query handlers.

mod create_action_plan;
mod delete_action_plan;
mod get_summary;
mod refresh_statuses;
mod update_action_plan;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_action_plan::{
    CreateActionPlanCommand, CreateActionPlanHandler, CreateActionPlanResult,
};
pub use delete_action_plan::{DeleteActionPlanCommand, DeleteActionPlanHandler};
pub use get_summary::{GetActionPlanSummaryHandler, GetActionPlanSummaryQuery};
pub use refresh_statuses::{RefreshActionPlanStatusesHandler, RefreshActionPlanStatusesResult};
pub use update_action_plan::{
    UpdateActionPlanCommand, UpdateActionPlanHandler, UpdateActionPlanResult,
};
