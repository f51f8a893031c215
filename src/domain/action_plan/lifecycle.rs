//! ActionPlanLifecycle - Status derivation and progress rules.
//!
//! Status moves freely between the four values on manual edits. The only
//! automatic transition is to `Overdue`, recomputed from an injected
//! `now` every time the host refreshes. `Completed` is never overridden.

use serde::{Deserialize, Serialize};

use super::{ActionPlan, PlanStatus, ValidatedActionPlan};
use crate::domain::foundation::{ActionPlanId, Percentage, Timestamp};

/// What an edit does to a plan's stored progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPolicy {
    /// Progress is carried over unchanged whatever the new status.
    #[default]
    Preserve,

    /// Progress becomes 100 when an edit sets `Completed`; otherwise carried over.
    CompleteSetsFull,
}

/// Applies creation, edit and refresh rules to action plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionPlanLifecycle {
    progress_policy: ProgressPolicy,
}

impl ActionPlanLifecycle {
    pub fn new(progress_policy: ProgressPolicy) -> Self {
        Self { progress_policy }
    }

    pub fn progress_policy(&self) -> ProgressPolicy {
        self.progress_policy
    }

    /// Status the plan should show at `now`.
    ///
    /// Pure and idempotent. A plan whose deadline passes between refreshes
    /// is only flagged on the next call.
    pub fn derive_status(plan: &ActionPlan, now: Timestamp) -> PlanStatus {
        if plan.status.is_completed() {
            PlanStatus::Completed
        } else if plan.deadline_instant().is_before(&now) {
            PlanStatus::Overdue
        } else {
            plan.status
        }
    }

    /// Progress assigned on creation.
    pub fn initial_progress(status: PlanStatus) -> Percentage {
        if status.is_completed() {
            Percentage::HUNDRED
        } else {
            Percentage::ZERO
        }
    }

    /// Commits a validated draft under a store-assigned id.
    pub fn create(&self, id: ActionPlanId, validated: ValidatedActionPlan) -> ActionPlan {
        let status = validated.status();
        build(id, validated, status, Self::initial_progress(status))
    }

    /// Applies an edit to a stored plan, keeping its id.
    pub fn apply_edit(&self, prior: &ActionPlan, validated: ValidatedActionPlan) -> ActionPlan {
        let status = validated.status();
        let progress = match self.progress_policy {
            ProgressPolicy::CompleteSetsFull if status.is_completed() => Percentage::HUNDRED,
            _ => prior.progress,
        };
        build(prior.id, validated, status, progress)
    }

    /// The plan with its derived status, or `None` when nothing changed.
    pub fn refresh(plan: &ActionPlan, now: Timestamp) -> Option<ActionPlan> {
        let derived = Self::derive_status(plan, now);
        if derived == plan.status {
            return None;
        }
        Some(ActionPlan {
            status: derived,
            ..plan.clone()
        })
    }
}

fn build(
    id: ActionPlanId,
    validated: ValidatedActionPlan,
    status: PlanStatus,
    progress: Percentage,
) -> ActionPlan {
    ActionPlan {
        id,
        offense: validated.offense().to_string(),
        cause: validated.cause().to_string(),
        action: validated.action().to_string(),
        execution_plan: validated.execution_plan().to_string(),
        owner: validated.owner().to_string(),
        start_date: validated.start_date(),
        deadline: validated.deadline(),
        status,
        progress,
    }
}
