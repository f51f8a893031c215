//! Period module - Date-range filter rules.

mod date_range;

pub use date_range::{
    DateRange, DateRangeError, DateRangeValidator, QuickRangePreset, DEFAULT_MAX_SPAN_DAYS,
    DEFAULT_WINDOW_DAYS,
};
