//! Action plan domain events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlanStatus;
use crate::domain::foundation::{domain_event, ActionPlanId, EventId, Percentage, Timestamp};

/// Published when a validated draft is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlanCreated {
    pub event_id: EventId,
    pub plan_id: ActionPlanId,
    pub owner: String,
    pub status: PlanStatus,
    pub progress: Percentage,
    pub deadline: NaiveDate,
    pub created_at: Timestamp,
}

domain_event!(
    ActionPlanCreated,
    event_type = "action_plan.created.v1",
    aggregate_id = plan_id,
    aggregate_type = "ActionPlan",
    occurred_at = created_at,
    event_id = event_id
);

/// Published when a stored plan is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlanUpdated {
    pub event_id: EventId,
    pub plan_id: ActionPlanId,
    pub previous_status: PlanStatus,
    pub status: PlanStatus,
    pub progress: Percentage,
    pub updated_at: Timestamp,
}

domain_event!(
    ActionPlanUpdated,
    event_type = "action_plan.updated.v1",
    aggregate_id = plan_id,
    aggregate_type = "ActionPlan",
    occurred_at = updated_at,
    event_id = event_id
);

/// Published when a refresh flags a plan as overdue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlanMarkedOverdue {
    pub event_id: EventId,
    pub plan_id: ActionPlanId,
    pub previous_status: PlanStatus,
    pub deadline: NaiveDate,
    pub detected_at: Timestamp,
}

domain_event!(
    ActionPlanMarkedOverdue,
    event_type = "action_plan.marked_overdue.v1",
    aggregate_id = plan_id,
    aggregate_type = "ActionPlan",
    occurred_at = detected_at,
    event_id = event_id
);
