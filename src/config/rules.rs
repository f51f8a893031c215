//! Rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::action_plan::{ActionPlanLifecycle, ProgressPolicy};
use crate::domain::period::{
    DateRangeValidator, QuickRangePreset, DEFAULT_MAX_SPAN_DAYS, DEFAULT_WINDOW_DAYS,
};

/// Tunable limits and policies for the rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RulesConfig {
    /// Longest period the indicator filter accepts, in days
    #[serde(default = "default_max_range_span_days")]
    pub max_range_span_days: u32,

    /// Window applied when the filter has no dates yet
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,

    /// Progress handling when an edit changes status
    #[serde(default)]
    pub progress_on_edit: ProgressPolicy,
}

impl RulesConfig {
    /// Date-range validator with the configured limits
    pub fn date_range_validator(&self) -> DateRangeValidator {
        DateRangeValidator::new(self.max_range_span_days, self.default_window_days)
    }

    /// Lifecycle with the configured progress policy
    pub fn lifecycle(&self) -> ActionPlanLifecycle {
        ActionPlanLifecycle::new(self.progress_on_edit)
    }

    /// Validate rules configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_range_span_days == 0 {
            return Err(ValidationError::InvalidMaxSpan);
        }
        if self.default_window_days == 0 {
            return Err(ValidationError::InvalidDefaultWindow);
        }
        if self.default_window_days > self.max_range_span_days {
            return Err(ValidationError::DefaultWindowExceedsSpan {
                window: self.default_window_days,
                max: self.max_range_span_days,
            });
        }
        if let Some(preset) = QuickRangePreset::ALL
            .into_iter()
            .find(|preset| preset.days() > self.max_range_span_days)
        {
            return Err(ValidationError::PresetExceedsSpan {
                preset: preset.days(),
                max: self.max_range_span_days,
            });
        }
        Ok(())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_range_span_days: default_max_range_span_days(),
            default_window_days: default_window_days(),
            progress_on_edit: ProgressPolicy::default(),
        }
    }
}

fn default_max_range_span_days() -> u32 {
    DEFAULT_MAX_SPAN_DAYS
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}
