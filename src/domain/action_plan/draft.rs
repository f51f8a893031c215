//! Unvalidated action-plan input as gathered by the form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlanStatus;

/// Raw form values for a new or edited action plan.
///
/// String fields only count once trimmed; dates are `None` until picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionPlanDraft {
    pub offense: String,
    pub cause: String,
    pub action: String,
    pub execution_plan: String,
    pub owner: String,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub status: PlanStatus,
}

impl ActionPlanDraft {
    /// Creates a draft with every text field filled in.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        offense: impl Into<String>,
        cause: impl Into<String>,
        action: impl Into<String>,
        execution_plan: impl Into<String>,
        owner: impl Into<String>,
        start_date: NaiveDate,
        deadline: NaiveDate,
        status: PlanStatus,
    ) -> Self {
        Self {
            offense: offense.into(),
            cause: cause.into(),
            action: action.into(),
            execution_plan: execution_plan.into(),
            owner: owner.into(),
            start_date: Some(start_date),
            deadline: Some(deadline),
            status,
        }
    }

    pub fn with_status(mut self, status: PlanStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_dates(mut self, start_date: Option<NaiveDate>, deadline: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self.deadline = deadline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_blank_and_to_start() {
        let draft = ActionPlanDraft::default();
        assert!(draft.offense.is_empty());
        assert!(draft.start_date.is_none());
        assert_eq!(draft.status, PlanStatus::ToStart);
    }

    #[test]
    fn deserializes_partial_form_payload() {
        let json = r#"{"offense":"Receita abaixo","executionPlan":"Semanal","deadline":"2024-11-15"}"#;
        let draft: ActionPlanDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.execution_plan, "Semanal");
        assert_eq!(draft.deadline, NaiveDate::from_ymd_opt(2024, 11, 15));
        assert!(draft.cause.is_empty());
    }

    #[test]
    fn form_status_code_deserializes() {
        let json = r#"{"owner":"ana-costa","status":"em-andamento"}"#;
        let draft: ActionPlanDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.status, PlanStatus::InProgress);
    }
}
