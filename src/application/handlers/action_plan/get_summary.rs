//! GetActionPlanSummaryHandler - Query handler for the portfolio overview.

use std::sync::Arc;

use crate::domain::action_plan::{ActionPlanError, ActionPlanSummary};
use crate::domain::foundation::Timestamp;
use crate::ports::ActionPlanRepository;

/// Query for the summary as seen at `now`.
#[derive(Debug, Clone, Copy)]
pub struct GetActionPlanSummaryQuery {
    pub now: Timestamp,
}

/// Handler for the action plan summary.
pub struct GetActionPlanSummaryHandler {
    repository: Arc<dyn ActionPlanRepository>,
}

impl GetActionPlanSummaryHandler {
    pub fn new(repository: Arc<dyn ActionPlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetActionPlanSummaryQuery,
    ) -> Result<ActionPlanSummary, ActionPlanError> {
        let plans = self.repository.find_all().await?;
        Ok(ActionPlanSummary::from_plans(&plans, query.now))
    }
}
