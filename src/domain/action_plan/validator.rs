//! ActionPlanValidator - Required-field and cross-field checks on drafts.
//!
//! Every failing field is reported in one pass so the form can mark all
//! of them at once. A draft only becomes a [`ValidatedActionPlan`] when
//! the error map is empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{ActionPlanDraft, PlanStatus};

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Offense,
    Cause,
    Action,
    ExecutionPlan,
    Owner,
    StartDate,
    Deadline,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Offense => "offense",
            FieldName::Cause => "cause",
            FieldName::Action => "action",
            FieldName::ExecutionPlan => "executionPlan",
            FieldName::Owner => "owner",
            FieldName::StartDate => "startDate",
            FieldName::Deadline => "deadline",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What is wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    DeadlineBeforeStart,
}

impl FieldErrorKind {
    /// Inline message shown beside the field.
    pub fn message_for(&self, field: FieldName) -> &'static str {
        match (self, field) {
            (FieldErrorKind::DeadlineBeforeStart, _) => "Prazo deve ser posterior à data de início",
            (FieldErrorKind::Required, FieldName::Offense) => "Ofensa é obrigatória",
            (FieldErrorKind::Required, FieldName::Cause) => "Causa é obrigatória",
            (FieldErrorKind::Required, FieldName::Action) => "Ação é obrigatória",
            (FieldErrorKind::Required, FieldName::ExecutionPlan) => "Como será feito é obrigatório",
            (FieldErrorKind::Required, FieldName::Owner) => "Responsável é obrigatório",
            (FieldErrorKind::Required, FieldName::StartDate) => "Data de início é obrigatória",
            (FieldErrorKind::Required, FieldName::Deadline) => "Prazo é obrigatório",
        }
    }
}

/// Per-field validation errors, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, FieldErrorKind>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error, replacing any earlier one on the same field.
    pub fn insert(&mut self, field: FieldName, kind: FieldErrorKind) {
        self.0.insert(field, kind);
    }

    pub fn get(&self, field: FieldName) -> Option<FieldErrorKind> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldErrorKind)> + '_ {
        self.0.iter().map(|(field, kind)| (*field, *kind))
    }

    /// Field name to user-facing message, for the form.
    pub fn messages(&self) -> BTreeMap<&'static str, &'static str> {
        self.iter()
            .map(|(field, kind)| (field.as_str(), kind.message_for(field)))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().map(|field| field.as_str()).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

/// A draft that passed validation. Text fields are trimmed.
///
/// Only [`ActionPlanValidator`] can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedActionPlan {
    offense: String,
    cause: String,
    action: String,
    execution_plan: String,
    owner: String,
    start_date: NaiveDate,
    deadline: NaiveDate,
    status: PlanStatus,
}

impl ValidatedActionPlan {
    pub fn offense(&self) -> &str {
        &self.offense
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn execution_plan(&self) -> &str {
        &self.execution_plan
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    pub fn status(&self) -> PlanStatus {
        self.status
    }
}

/// Validates action-plan drafts before they are committed.
pub struct ActionPlanValidator;

impl ActionPlanValidator {
    pub fn validate(draft: &ActionPlanDraft) -> Result<ValidatedActionPlan, FieldErrors> {
        let mut errors = FieldErrors::new();

        let offense = required_text(&draft.offense, FieldName::Offense, &mut errors);
        let cause = required_text(&draft.cause, FieldName::Cause, &mut errors);
        let action = required_text(&draft.action, FieldName::Action, &mut errors);
        let execution_plan =
            required_text(&draft.execution_plan, FieldName::ExecutionPlan, &mut errors);
        let owner = required_text(&draft.owner, FieldName::Owner, &mut errors);

        if draft.start_date.is_none() {
            errors.insert(FieldName::StartDate, FieldErrorKind::Required);
        }
        if draft.deadline.is_none() {
            errors.insert(FieldName::Deadline, FieldErrorKind::Required);
        }

        // Reported on the deadline, which is where the form shows it.
        if let (Some(start), Some(deadline)) = (draft.start_date, draft.deadline) {
            if start > deadline {
                errors.insert(FieldName::Deadline, FieldErrorKind::DeadlineBeforeStart);
            }
        }

        match (draft.start_date, draft.deadline) {
            (Some(start_date), Some(deadline)) if errors.is_empty() => Ok(ValidatedActionPlan {
                offense,
                cause,
                action,
                execution_plan,
                owner,
                start_date,
                deadline,
                status: draft.status,
            }),
            _ => Err(errors),
        }
    }
}

fn required_text(value: &str, field: FieldName, errors: &mut FieldErrors) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, FieldErrorKind::Required);
    }
    trimmed.to_string()
}
