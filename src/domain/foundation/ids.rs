//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a committed action plan.
///
/// Assigned by the store on creation from a monotonically increasing
/// counter and never reused, even after the plan is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionPlanId(u64);

impl ActionPlanId {
    /// First id handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates an ActionPlanId from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ActionPlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ActionPlanId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("action_plan_id", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_is_one() {
        assert_eq!(ActionPlanId::FIRST.value(), 1);
    }

    #[test]
    fn next_increments_by_one() {
        assert_eq!(ActionPlanId::new(41).next(), ActionPlanId::new(42));
    }

    #[test]
    fn displays_as_integer() {
        assert_eq!(format!("{}", ActionPlanId::new(7)), "7");
    }

    #[test]
    fn parses_from_string() {
        let id: ActionPlanId = " 12 ".parse().unwrap();
        assert_eq!(id.value(), 12);
    }

    #[test]
    fn rejects_non_numeric_string() {
        let result: Result<ActionPlanId, _> = "abc".parse();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&ActionPlanId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn ordering_follows_value() {
        assert!(ActionPlanId::new(1) < ActionPlanId::new(2));
    }
}
