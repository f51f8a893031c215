//! Domain layer containing the dashboard's business rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, events, errors)
//! - `indicator` - Deviation and performance-band classification
//! - `period` - Date-range filter validation and quick ranges
//! - `action_plan` - Action plan validation, lifecycle and summary

pub mod action_plan;
pub mod foundation;
pub mod indicator;
pub mod period;
