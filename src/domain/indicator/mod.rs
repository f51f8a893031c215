//! Indicator module - Deviation and performance-band rules.

mod band;
mod catalog;
mod deviation;
mod evaluation;

pub use band::{
    BandClassification, IndicatorError, PerformanceBand, PerformanceBandClassifier, Severity,
};
pub use catalog::{IndicatorKind, ValueKind};
pub use deviation::{Deviation, DeviationCalculator};
pub use evaluation::{Indicator, IndicatorEvaluation};
