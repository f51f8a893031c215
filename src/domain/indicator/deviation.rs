//! Deviation between an indicator's target and its actual value.

use serde::{Deserialize, Serialize};

/// Absolute and relative distance of an actual value from its target.
///
/// `percentage` is `None` when the target is zero: the relative
/// deviation is undefined there and must be rendered as "not applicable".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deviation {
    pub absolute: f64,
    pub percentage: Option<f64>,
}

impl Deviation {
    /// True when the actual value met or beat the target.
    pub fn is_favorable(&self) -> bool {
        self.absolute >= 0.0
    }

    /// True when the actual value fell short of the target.
    pub fn is_shortfall(&self) -> bool {
        self.absolute < 0.0
    }
}

/// Pure calculator for target/actual deviation.
pub struct DeviationCalculator;

impl DeviationCalculator {
    /// Computes `actual - target` and, for a non-zero target, the same
    /// difference as a percentage of the target.
    ///
    /// Values are exact; rounding belongs to the presentation layer.
    pub fn compute(target: f64, actual: f64) -> Deviation {
        let absolute = actual - target;
        let percentage = if target == 0.0 {
            None
        } else {
            Some(absolute / target * 100.0)
        };

        Deviation {
            absolute,
            percentage,
        }
    }
}
