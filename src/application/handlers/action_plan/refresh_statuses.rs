//! RefreshActionPlanStatusesHandler - Host-driven refresh tick.
//!
//! Re-derives every plan's status at the injected time and persists the
//! ones that changed. Overdue detection is only as fresh as the last tick.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::action_plan::{
    ActionPlan, ActionPlanError, ActionPlanLifecycle, ActionPlanMarkedOverdue, PlanStatus,
};
use crate::domain::foundation::{
    ActionPlanId, CommandMetadata, EventEnvelope, EventId, SerializableDomainEvent,
};
use crate::ports::{ActionPlanRepository, EventPublisher};

/// Result of one refresh tick.
#[derive(Debug, Clone)]
pub struct RefreshActionPlanStatusesResult {
    /// Every plan after refresh, ordered by id.
    pub plans: Vec<ActionPlan>,
    /// Plans that became overdue on this tick.
    pub marked_overdue: Vec<ActionPlanId>,
}

/// Handler for refreshing derived action plan statuses.
pub struct RefreshActionPlanStatusesHandler {
    repository: Arc<dyn ActionPlanRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RefreshActionPlanStatusesHandler {
    pub fn new(
        repository: Arc<dyn ActionPlanRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        metadata: CommandMetadata,
    ) -> Result<RefreshActionPlanStatusesResult, ActionPlanError> {
        let now = metadata.now;
        let correlation_id = metadata.correlation_id();
        let mut plans = self.repository.find_all().await?;
        let mut marked_overdue = Vec::new();
        let mut envelopes: Vec<EventEnvelope> = Vec::new();

        for plan in plans.iter_mut() {
            let Some(refreshed) = ActionPlanLifecycle::refresh(plan, now) else {
                continue;
            };

            self.repository.update(&refreshed).await?;
            debug!(plan_id = %refreshed.id, from = plan.status.code(), to = refreshed.status.code(), "status re-derived");

            if refreshed.status == PlanStatus::Overdue {
                let event = ActionPlanMarkedOverdue {
                    event_id: EventId::new(),
                    plan_id: refreshed.id,
                    previous_status: plan.status,
                    deadline: refreshed.deadline,
                    detected_at: now,
                };
                envelopes.push(event.to_envelope()?.with_correlation_id(correlation_id.clone()));
                marked_overdue.push(refreshed.id);
            }

            *plan = refreshed;
        }

        if !envelopes.is_empty() {
            self.event_publisher.publish_all(envelopes).await?;
        }

        info!(
            total = plans.len(),
            newly_overdue = marked_overdue.len(),
            "action plan statuses refreshed"
        );

        Ok(RefreshActionPlanStatusesResult {
            plans,
            marked_overdue,
        })
    }
}
