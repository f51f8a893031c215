//! ActionPlan - A committed remediation record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{owner_display_name, PlanStatus};
use crate::domain::foundation::{ActionPlanId, Percentage, Timestamp};

/// An action plan as held by the store.
///
/// Built from a validated draft by the lifecycle, or loaded as-is from
/// storage; the store owns the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub id: ActionPlanId,
    pub offense: String,
    pub cause: String,
    pub action: String,
    pub execution_plan: String,
    pub owner: String,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub status: PlanStatus,
    pub progress: Percentage,
}

impl ActionPlan {
    /// Instant the deadline is compared against: 00:00 UTC of the deadline day.
    pub fn deadline_instant(&self) -> Timestamp {
        Timestamp::start_of_day(self.deadline)
    }

    /// True when the plan is not completed and its deadline has passed.
    pub fn is_past_deadline(&self, now: Timestamp) -> bool {
        !self.status.is_completed() && self.deadline_instant().is_before(&now)
    }

    pub fn owner_name(&self) -> &str {
        owner_display_name(&self.owner)
    }

    /// Whole days left until the deadline day, negative once past it.
    pub fn days_remaining(&self, now: Timestamp) -> i64 {
        (self.deadline - now.date()).num_days()
    }
}
