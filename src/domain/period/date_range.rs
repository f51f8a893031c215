//! Date-range filter rules for indicator history.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Timestamp;

/// Longest span a filter may cover, in days.
pub const DEFAULT_MAX_SPAN_DAYS: u32 = 365;

/// Window applied when the filter has no endpoints yet.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Why a (start, end) pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateRangeError {
    #[error("Data inicial deve ser anterior à data final")]
    StartAfterEnd,

    #[error("{}", span_too_long_message(.max_days))]
    SpanTooLong { span_days: i64, max_days: u32 },
}

fn span_too_long_message(max_days: &u32) -> String {
    if *max_days == DEFAULT_MAX_SPAN_DAYS {
        "O período não pode exceder 1 ano (365 dias)".to_string()
    } else {
        format!("O período não pode exceder {} dias", max_days)
    }
}

/// A validated, day-granular period. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range checked against the default one-year limit.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        DateRangeValidator::default().check(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of whole days between the endpoints.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Shortcut buttons offered by the indicator filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickRangePreset {
    Last7Days,
    Last30Days,
    Last90Days,
}

impl QuickRangePreset {
    pub const ALL: [QuickRangePreset; 3] = [
        QuickRangePreset::Last7Days,
        QuickRangePreset::Last30Days,
        QuickRangePreset::Last90Days,
    ];

    pub fn days(&self) -> u32 {
        match self {
            QuickRangePreset::Last7Days => 7,
            QuickRangePreset::Last30Days => 30,
            QuickRangePreset::Last90Days => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickRangePreset::Last7Days => "7 dias",
            QuickRangePreset::Last30Days => "30 dias",
            QuickRangePreset::Last90Days => "90 dias",
        }
    }

    pub fn range(&self, now: Timestamp) -> DateRange {
        DateRangeValidator::quick_range(now, self.days())
    }
}

/// Ordering and maximum-span checks for filter periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeValidator {
    max_span_days: u32,
    default_window_days: u32,
}

impl Default for DateRangeValidator {
    fn default() -> Self {
        Self {
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
            default_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl DateRangeValidator {
    pub fn new(max_span_days: u32, default_window_days: u32) -> Self {
        Self {
            max_span_days,
            default_window_days,
        }
    }

    pub fn max_span_days(&self) -> u32 {
        self.max_span_days
    }

    pub fn default_window_days(&self) -> u32 {
        self.default_window_days
    }

    /// Validates a pair of calendar days.
    ///
    /// Returns `Ok` while either endpoint is still missing: the filter is
    /// only checked once both are filled in.
    pub fn validate(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), DateRangeError> {
        match (start, end) {
            (Some(start), Some(end)) => self.check(start, end).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Validates a pair of instants.
    ///
    /// The span is rounded up to whole days, so 365 days and one second
    /// counts as 366.
    pub fn validate_instants(
        &self,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<(), DateRangeError> {
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => return Ok(()),
        };

        if start.is_after(&end) {
            return Err(DateRangeError::StartAfterEnd);
        }

        let millis = end.duration_since(&start).num_milliseconds().abs();
        let span_days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
        self.check_span(span_days)
    }

    /// Validates both endpoints and returns the committed range.
    pub fn check(&self, start: NaiveDate, end: NaiveDate) -> Result<DateRange, DateRangeError> {
        if start > end {
            return Err(DateRangeError::StartAfterEnd);
        }
        self.check_span((end - start).num_days())?;
        Ok(DateRange { start, end })
    }

    fn check_span(&self, span_days: i64) -> Result<(), DateRangeError> {
        if span_days > i64::from(self.max_span_days) {
            return Err(DateRangeError::SpanTooLong {
                span_days,
                max_days: self.max_span_days,
            });
        }
        Ok(())
    }

    /// The `days`-long window ending on the day of `now`.
    ///
    /// Not checked against any span limit; callers pick `days` from the
    /// offered presets. A window reaching past the earliest representable
    /// date starts at `NaiveDate::MIN`.
    pub fn quick_range(now: Timestamp, days: u32) -> DateRange {
        let end = now.date();
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        DateRange { start, end }
    }

    /// Range used when the filter opens with empty endpoints.
    pub fn default_window(&self, now: Timestamp) -> DateRange {
        Self::quick_range(now, self.default_window_days)
    }
}
