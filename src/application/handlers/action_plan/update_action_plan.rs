//! UpdateActionPlanHandler - Applies a form edit to a stored action plan.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::action_plan::{
    ActionPlan, ActionPlanDraft, ActionPlanError, ActionPlanLifecycle, ActionPlanUpdated,
    ActionPlanValidator,
};
use crate::domain::foundation::{ActionPlanId, CommandMetadata, EventId, SerializableDomainEvent};
use crate::ports::{ActionPlanRepository, EventPublisher};

/// Command to edit an existing action plan.
#[derive(Debug, Clone)]
pub struct UpdateActionPlanCommand {
    pub id: ActionPlanId,
    pub draft: ActionPlanDraft,
}

/// Result of a successful edit.
#[derive(Debug, Clone)]
pub struct UpdateActionPlanResult {
    pub plan: ActionPlan,
    pub previous: ActionPlan,
    pub event: ActionPlanUpdated,
}

/// Handler for editing action plans.
pub struct UpdateActionPlanHandler {
    repository: Arc<dyn ActionPlanRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    lifecycle: ActionPlanLifecycle,
}

impl UpdateActionPlanHandler {
    pub fn new(
        repository: Arc<dyn ActionPlanRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        lifecycle: ActionPlanLifecycle,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            lifecycle,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateActionPlanCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateActionPlanResult, ActionPlanError> {
        let previous = self
            .repository
            .find_by_id(cmd.id)
            .await?
            .ok_or_else(|| ActionPlanError::not_found(cmd.id))?;

        let validated = ActionPlanValidator::validate(&cmd.draft).map_err(|errors| {
            warn!(plan_id = %cmd.id, fields = %errors, "action plan edit rejected");
            ActionPlanError::invalid(errors)
        })?;

        let plan = self.lifecycle.apply_edit(&previous, validated);
        self.repository.update(&plan).await?;

        let event = ActionPlanUpdated {
            event_id: EventId::new(),
            plan_id: plan.id,
            previous_status: previous.status,
            status: plan.status,
            progress: plan.progress,
            updated_at: metadata.now,
        };

        let mut envelope = event
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id());
        if let Some(actor) = metadata.actor() {
            envelope = envelope.with_actor(actor);
        }
        self.event_publisher.publish(envelope).await?;

        info!(
            plan_id = %plan.id,
            from = previous.status.code(),
            to = plan.status.code(),
            "action plan updated"
        );

        Ok(UpdateActionPlanResult {
            plan,
            previous,
            event,
        })
    }
}
