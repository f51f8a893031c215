//! Action-plan specific error types.

use super::FieldErrors;
use crate::domain::foundation::{ActionPlanId, DomainError, ErrorCode};

/// Errors returned by action-plan handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPlanError {
    /// No plan with this id in the store.
    NotFound(ActionPlanId),
    /// The draft failed validation; nothing was committed.
    Invalid(FieldErrors),
    /// Store or event publishing failed.
    Infrastructure(String),
}

impl ActionPlanError {
    pub fn not_found(id: ActionPlanId) -> Self {
        ActionPlanError::NotFound(id)
    }
    pub fn invalid(errors: FieldErrors) -> Self {
        ActionPlanError::Invalid(errors)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ActionPlanError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ActionPlanError::NotFound(_) => ErrorCode::ActionPlanNotFound,
            ActionPlanError::Invalid(_) => ErrorCode::ValidationFailed,
            ActionPlanError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ActionPlanError::NotFound(id) => format!("Action plan not found: {}", id),
            ActionPlanError::Invalid(errors) => format!("Validation failed: {}", errors),
            ActionPlanError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
    /// Field errors to show inline, when the failure was a validation one.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ActionPlanError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionPlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ActionPlanError {}

impl From<FieldErrors> for ActionPlanError {
    fn from(errors: FieldErrors) -> Self {
        ActionPlanError::Invalid(errors)
    }
}

impl From<DomainError> for ActionPlanError {
    fn from(err: DomainError) -> Self {
        match (err.code, err.details.get("id").and_then(|id| id.parse::<ActionPlanId>().ok())) {
            (ErrorCode::ActionPlanNotFound, Some(id)) => ActionPlanError::NotFound(id),
            _ => ActionPlanError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action_plan::{FieldErrorKind, FieldName};

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            ActionPlanError::not_found(ActionPlanId::new(9)).code(),
            ErrorCode::ActionPlanNotFound
        );
        assert_eq!(
            ActionPlanError::invalid(FieldErrors::new()).code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ActionPlanError::infrastructure("disk").code(),
            ErrorCode::StorageError
        );
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(
            ActionPlanError::not_found(ActionPlanId::new(9)).to_string(),
            "Action plan not found: 9"
        );
    }

    #[test]
    fn invalid_exposes_field_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldName::Owner, FieldErrorKind::Required);

        let err: ActionPlanError = errors.clone().into();
        assert_eq!(err.field_errors(), Some(&errors));
        assert!(err.message().contains("owner"));
    }

    #[test]
    fn domain_not_found_with_id_maps_to_not_found() {
        let domain = DomainError::new(ErrorCode::ActionPlanNotFound, "missing").with_detail("id", "7");
        assert_eq!(
            ActionPlanError::from(domain),
            ActionPlanError::NotFound(ActionPlanId::new(7))
        );
    }

    #[test]
    fn other_domain_errors_are_infrastructure() {
        let domain = DomainError::new(ErrorCode::StorageError, "lock failed");
        assert!(matches!(
            ActionPlanError::from(domain),
            ActionPlanError::Infrastructure(msg) if msg.contains("STORAGE_ERROR")
        ));
    }
}
