//! Portfolio view over all action plans.

use serde::Serialize;

use super::{ActionPlan, ActionPlanLifecycle, PlanStatus};
use crate::domain::foundation::{ActionPlanId, Timestamp};

/// Counts and averages shown above the action-plan list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlanSummary {
    pub total: usize,
    pub to_start: usize,
    pub in_progress: usize,
    pub overdue: usize,
    pub completed: usize,
    /// Mean progress rounded to the nearest whole percent; 0 with no plans.
    pub average_progress: u8,
    /// Plans to list in the overdue alert, in input order.
    pub overdue_ids: Vec<ActionPlanId>,
}

impl ActionPlanSummary {
    /// Builds the summary using each plan's status as derived at `now`.
    pub fn from_plans(plans: &[ActionPlan], now: Timestamp) -> Self {
        let mut summary = Self {
            total: plans.len(),
            ..Self::default()
        };

        for plan in plans {
            match ActionPlanLifecycle::derive_status(plan, now) {
                PlanStatus::ToStart => summary.to_start += 1,
                PlanStatus::InProgress => summary.in_progress += 1,
                PlanStatus::Overdue => summary.overdue += 1,
                PlanStatus::Completed => summary.completed += 1,
            }
            if plan.is_past_deadline(now) {
                summary.overdue_ids.push(plan.id);
            }
        }

        if !plans.is_empty() {
            let sum: u32 = plans.iter().map(|p| u32::from(p.progress.value())).sum();
            let mean = f64::from(sum) / plans.len() as f64;
            summary.average_progress = mean.round() as u8;
        }

        summary
    }

    pub fn count(&self, status: PlanStatus) -> usize {
        match status {
            PlanStatus::ToStart => self.to_start,
            PlanStatus::InProgress => self.in_progress,
            PlanStatus::Overdue => self.overdue,
            PlanStatus::Completed => self.completed,
        }
    }

    pub fn has_overdue(&self) -> bool {
        !self.overdue_ids.is_empty()
    }
}
