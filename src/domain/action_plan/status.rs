//! PlanStatus enum - Lifecycle state of an action plan.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Status of an action plan.
///
/// Serializes as snake_case; the form codes are accepted on input too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Not started yet (initial state chosen by most callers).
    #[default]
    #[serde(alias = "a-iniciar")]
    ToStart,

    /// Work is under way.
    #[serde(alias = "em-andamento")]
    InProgress,

    /// Deadline passed before completion.
    #[serde(alias = "atrasado")]
    Overdue,

    /// Finished. Never overridden by automatic derivation.
    #[serde(alias = "concluido")]
    Completed,
}

impl PlanStatus {
    pub const ALL: [PlanStatus; 4] = [
        PlanStatus::ToStart,
        PlanStatus::InProgress,
        PlanStatus::Overdue,
        PlanStatus::Completed,
    ];

    /// Short code used by forms and filters.
    pub fn code(&self) -> &'static str {
        match self {
            PlanStatus::ToStart => "a-iniciar",
            PlanStatus::InProgress => "em-andamento",
            PlanStatus::Overdue => "atrasado",
            PlanStatus::Completed => "concluido",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanStatus::ToStart => "A Iniciar",
            PlanStatus::InProgress => "Em Andamento",
            PlanStatus::Overdue => "Atrasado",
            PlanStatus::Completed => "Concluído",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PlanStatus::Completed)
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PlanStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s.trim())
            .ok_or_else(|| ValidationError::invalid_format("status", format!("unknown code '{}'", s)))
    }
}
