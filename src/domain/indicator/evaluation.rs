//! Indicator readings and their evaluated view.

use serde::{Deserialize, Serialize};

use super::{
    BandClassification, Deviation, DeviationCalculator, IndicatorKind, PerformanceBandClassifier,
    ValueKind,
};

/// A target/actual pair as supplied by the host. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub target: f64,
    pub actual: f64,
    pub value_kind: ValueKind,
}

impl Indicator {
    pub fn new(target: f64, actual: f64, value_kind: ValueKind) -> Self {
        Self {
            target,
            actual,
            value_kind,
        }
    }

    /// Builds a reading for a catalogued indicator, taking its unit from the catalogue.
    pub fn of(kind: IndicatorKind, target: f64, actual: f64) -> Self {
        Self::new(target, actual, kind.value_kind())
    }
}

/// Everything the dashboard renders for one indicator row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorEvaluation {
    pub indicator: Indicator,
    pub deviation: Deviation,
    /// Absent when the target is zero.
    pub band: Option<BandClassification>,
    /// Shortfalls get the "Plano de Ação" shortcut.
    pub needs_action_plan: bool,
}

impl IndicatorEvaluation {
    pub fn evaluate(indicator: &Indicator) -> Self {
        let deviation = DeviationCalculator::compute(indicator.target, indicator.actual);
        let band = PerformanceBandClassifier::classify(indicator.actual, indicator.target).ok();

        Self {
            indicator: *indicator,
            deviation,
            band,
            needs_action_plan: deviation.is_shortfall(),
        }
    }

    pub fn is_favorable(&self) -> bool {
        self.deviation.is_favorable()
    }
}
