//! CreateActionPlanHandler - Commits a new action plan from a form draft.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::action_plan::{
    ActionPlan, ActionPlanCreated, ActionPlanDraft, ActionPlanError, ActionPlanLifecycle,
    ActionPlanValidator,
};
use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent};
use crate::ports::{ActionPlanRepository, EventPublisher};

/// Command to create an action plan.
#[derive(Debug, Clone)]
pub struct CreateActionPlanCommand {
    pub draft: ActionPlanDraft,
}

/// Result of successful creation.
#[derive(Debug, Clone)]
pub struct CreateActionPlanResult {
    pub plan: ActionPlan,
    pub event: ActionPlanCreated,
}

/// Handler for creating action plans.
pub struct CreateActionPlanHandler {
    repository: Arc<dyn ActionPlanRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    lifecycle: ActionPlanLifecycle,
}

impl CreateActionPlanHandler {
    pub fn new(
        repository: Arc<dyn ActionPlanRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            lifecycle: ActionPlanLifecycle::default(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateActionPlanCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateActionPlanResult, ActionPlanError> {
        // 1. Validate; nothing is reserved or stored for a rejected draft
        let validated = ActionPlanValidator::validate(&cmd.draft).map_err(|errors| {
            warn!(fields = %errors, "action plan draft rejected");
            ActionPlanError::invalid(errors)
        })?;

        // 2. Assign id and apply creation rules
        let id = self.repository.next_id().await?;
        let plan = self.lifecycle.create(id, validated);

        // 3. Persist
        self.repository.save(&plan).await?;

        // 4. Publish
        let event = ActionPlanCreated {
            event_id: EventId::new(),
            plan_id: plan.id,
            owner: plan.owner.clone(),
            status: plan.status,
            progress: plan.progress,
            deadline: plan.deadline,
            created_at: metadata.now,
        };

        let mut envelope = event
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id());
        if let Some(actor) = metadata.actor() {
            envelope = envelope.with_actor(actor);
        }
        self.event_publisher.publish(envelope).await?;

        info!(plan_id = %plan.id, status = plan.status.code(), progress = %plan.progress, "action plan created");

        Ok(CreateActionPlanResult { plan, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::action_plan::test_support::{
        at, draft, MockActionPlanRepository, MockEventPublisher,
    };
    use crate::domain::action_plan::{FieldErrorKind, FieldName, PlanStatus};
    use crate::domain::foundation::{ActionPlanId, Percentage};

    fn handler(
        repo: Arc<MockActionPlanRepository>,
        publisher: Arc<MockEventPublisher>,
    ) -> CreateActionPlanHandler {
        CreateActionPlanHandler::new(repo, publisher)
    }

    #[tokio::test]
    async fn creates_plan_with_next_id() {
        let repo = Arc::new(MockActionPlanRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());

        let result = handler(repo.clone(), publisher.clone())
            .handle(
                CreateActionPlanCommand {
                    draft: draft(PlanStatus::ToStart),
                },
                CommandMetadata::test_fixture(at("2024-10-15")),
            )
            .await
            .unwrap();

        assert_eq!(result.plan.id, ActionPlanId::new(1));
        assert_eq!(result.plan.progress, Percentage::ZERO);
        assert_eq!(repo.plans().len(), 1);
    }

    #[tokio::test]
    async fn completed_on_creation_sets_full_progress() {
        let repo = Arc::new(MockActionPlanRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());

        let result = handler(repo, publisher)
            .handle(
                CreateActionPlanCommand {
                    draft: draft(PlanStatus::Completed),
                },
                CommandMetadata::test_fixture(at("2024-10-15")),
            )
            .await
            .unwrap();

        assert_eq!(result.plan.progress, Percentage::HUNDRED);
        assert_eq!(result.event.progress, Percentage::HUNDRED);
    }

    #[tokio::test]
    async fn publishes_created_event_with_correlation() {
        let repo = Arc::new(MockActionPlanRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());

        handler(repo, publisher.clone())
            .handle(
                CreateActionPlanCommand {
                    draft: draft(PlanStatus::InProgress),
                },
                CommandMetadata::test_fixture(at("2024-10-15")).with_actor("maria-silva"),
            )
            .await
            .unwrap();

        let published = publisher.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].event_type, "action_plan.created.v1");
        assert_eq!(published[0].aggregate_id, "1");
        assert_eq!(
            published[0].metadata.correlation_id.as_deref(),
            Some("test-correlation-id")
        );
        assert_eq!(published[0].metadata.actor.as_deref(), Some("maria-silva"));
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_without_side_effects() {
        let repo = Arc::new(MockActionPlanRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let mut blank_owner = draft(PlanStatus::ToStart);
        blank_owner.owner = "  ".to_string();

        let err = handler(repo.clone(), publisher.clone())
            .handle(
                CreateActionPlanCommand { draft: blank_owner },
                CommandMetadata::test_fixture(at("2024-10-15")),
            )
            .await
            .unwrap_err();

        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get(FieldName::Owner), Some(FieldErrorKind::Required));
        assert!(repo.plans().is_empty());
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let repo = Arc::new(MockActionPlanRepository::failing(vec![]));
        let publisher = Arc::new(MockEventPublisher::new());

        let err = handler(repo, publisher.clone())
            .handle(
                CreateActionPlanCommand {
                    draft: draft(PlanStatus::ToStart),
                },
                CommandMetadata::test_fixture(at("2024-10-15")),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ActionPlanError::Infrastructure(_)));
        assert!(publisher.published().is_empty());
    }
}
