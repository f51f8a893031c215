//! The operations the presentation layer calls.
//!
//! Thin entry points over the domain components, one per operation, with
//! default limits. Hosts that need configured limits use the components
//! directly.

use chrono::NaiveDate;

use crate::domain::action_plan::{
    ActionPlan, ActionPlanDraft, ActionPlanLifecycle, ActionPlanValidator, FieldErrors,
    PlanStatus, ValidatedActionPlan,
};
use crate::domain::foundation::Timestamp;
use crate::domain::indicator::{
    BandClassification, Deviation, DeviationCalculator, IndicatorError, PerformanceBandClassifier,
};
use crate::domain::period::{DateRange, DateRangeError, DateRangeValidator};

/// Absolute and percentage deviation of `actual` from `target`.
pub fn compute_deviation(target: f64, actual: f64) -> Deviation {
    DeviationCalculator::compute(target, actual)
}

/// Band and gauge ratio for `actual` against `target`.
pub fn classify_band(target: f64, actual: f64) -> Result<BandClassification, IndicatorError> {
    PerformanceBandClassifier::classify(actual, target)
}

/// Checks a filter period against the one-year limit.
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), DateRangeError> {
    DateRangeValidator::default().validate(start, end)
}

/// The `days`-long window ending today.
pub fn quick_range(now: Timestamp, days: u32) -> DateRange {
    DateRangeValidator::quick_range(now, days)
}

/// Checks a draft before it is committed, reporting every failing field.
pub fn validate_action_plan_draft(
    draft: &ActionPlanDraft,
) -> Result<ValidatedActionPlan, FieldErrors> {
    ActionPlanValidator::validate(draft)
}

/// Status of `plan` as seen at `now`; `Completed` always sticks.
pub fn derive_action_plan_status(plan: &ActionPlan, now: Timestamp) -> PlanStatus {
    ActionPlanLifecycle::derive_status(plan, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::PerformanceBand;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn classify_band_takes_target_first() {
        let c = classify_band(200.0, 150.0).unwrap();
        assert_eq!(c.band, PerformanceBand::Moderate);
        assert_eq!(c.ratio, 75.0);
    }

    #[test]
    fn compute_deviation_matches_calculator() {
        assert_eq!(compute_deviation(100.0, 92.0).percentage, Some(-8.0));
    }

    #[test]
    fn date_range_uses_one_year_limit() {
        assert!(validate_date_range(Some(day("2024-01-01")), Some(day("2024-12-31"))).is_ok());
        assert!(validate_date_range(Some(day("2024-01-01")), Some(day("2025-01-05"))).is_err());
    }

    #[test]
    fn quick_range_ends_today() {
        let now = Timestamp::start_of_day(day("2024-06-30")).plus_secs(3600);
        let range = quick_range(now, 90);
        assert_eq!(range.end(), day("2024-06-30"));
        assert_eq!(range.start(), day("2024-04-01"));
    }

    #[test]
    fn draft_validation_is_exposed() {
        assert_eq!(
            validate_action_plan_draft(&ActionPlanDraft::default())
                .unwrap_err()
                .len(),
            7
        );
    }
}
