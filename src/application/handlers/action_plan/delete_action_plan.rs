//! DeleteActionPlanHandler - Store-level removal of an action plan.

use std::sync::Arc;

use tracing::info;

use crate::domain::action_plan::ActionPlanError;
use crate::domain::foundation::{ActionPlanId, CommandMetadata};
use crate::ports::ActionPlanRepository;

/// Command to delete an action plan.
#[derive(Debug, Clone, Copy)]
pub struct DeleteActionPlanCommand {
    pub id: ActionPlanId,
}

/// Handler for deleting action plans. The id stays retired.
pub struct DeleteActionPlanHandler {
    repository: Arc<dyn ActionPlanRepository>,
}

impl DeleteActionPlanHandler {
    pub fn new(repository: Arc<dyn ActionPlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteActionPlanCommand,
        metadata: CommandMetadata,
    ) -> Result<(), ActionPlanError> {
        self.repository
            .find_by_id(cmd.id)
            .await?
            .ok_or_else(|| ActionPlanError::not_found(cmd.id))?;

        self.repository.delete(cmd.id).await?;

        info!(plan_id = %cmd.id, actor = metadata.actor().unwrap_or("unknown"), "action plan deleted");
        Ok(())
    }
}
