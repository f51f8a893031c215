//! Performance bands for gauge rendering.
//!
//! Classification runs on the unclamped ratio `actual / target * 100`
//! so over-achievement stays in the top band, while the ratio shown on
//! the gauge is clamped to `[0, 100]`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an indicator cannot be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("Target is zero; completion ratio is undefined")]
    UndefinedTarget,

    #[error("Indicator values must be finite numbers")]
    NonFiniteValue,
}

/// Qualitative performance tier, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Exceeded,
    NearTarget,
    Moderate,
    AttentionNeeded,
}

/// Visual severity attached to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Positive,
    Warning,
    Critical,
}

impl PerformanceBand {
    /// All bands in evaluation order.
    pub const ALL: [PerformanceBand; 4] = [
        PerformanceBand::Exceeded,
        PerformanceBand::NearTarget,
        PerformanceBand::Moderate,
        PerformanceBand::AttentionNeeded,
    ];

    /// Inclusive lower bound of the band, in percent of target.
    ///
    /// `AttentionNeeded` has no lower bound.
    pub fn lower_threshold(&self) -> Option<f64> {
        match self {
            PerformanceBand::Exceeded => Some(100.0),
            PerformanceBand::NearTarget => Some(80.0),
            PerformanceBand::Moderate => Some(60.0),
            PerformanceBand::AttentionNeeded => None,
        }
    }

    /// Picks the band for an unclamped ratio. First match wins.
    pub fn for_ratio(ratio: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| band.lower_threshold().is_some_and(|min| ratio >= min))
            .unwrap_or(PerformanceBand::AttentionNeeded)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceBand::Exceeded => "Meta Superada",
            PerformanceBand::NearTarget => "Próximo da Meta",
            PerformanceBand::Moderate => "Performance Moderada",
            PerformanceBand::AttentionNeeded => "Atenção Necessária",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PerformanceBand::Exceeded => Severity::Success,
            PerformanceBand::NearTarget => Severity::Positive,
            PerformanceBand::Moderate => Severity::Warning,
            PerformanceBand::AttentionNeeded => Severity::Critical,
        }
    }
}

/// Outcome of classifying one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandClassification {
    pub band: PerformanceBand,
    /// `actual / target * 100`, unclamped.
    pub ratio: f64,
    /// Ratio clamped to `[0, 100]` for the gauge.
    pub completion: f64,
}

impl BandClassification {
    /// Share of the gauge left unfilled.
    pub fn remaining(&self) -> f64 {
        100.0 - self.completion
    }

    pub fn label(&self) -> &'static str {
        self.band.label()
    }

    pub fn severity(&self) -> Severity {
        self.band.severity()
    }
}

/// Maps an actual/target pair onto a [`PerformanceBand`].
pub struct PerformanceBandClassifier;

impl PerformanceBandClassifier {
    /// Classifies `actual` against `target`.
    ///
    /// # Errors
    ///
    /// - `UndefinedTarget` when `target == 0`
    /// - `NonFiniteValue` when either input is NaN or infinite
    pub fn classify(actual: f64, target: f64) -> Result<BandClassification, IndicatorError> {
        if !actual.is_finite() || !target.is_finite() {
            return Err(IndicatorError::NonFiniteValue);
        }
        if target == 0.0 {
            return Err(IndicatorError::UndefinedTarget);
        }

        let ratio = actual / target * 100.0;

        Ok(BandClassification {
            band: PerformanceBand::for_ratio(ratio),
            ratio,
            completion: ratio.clamp(0.0, 100.0),
        })
    }
}
