//! IAF Dashboard - Rules core for the sales-performance dashboard.
//!
//! Computes indicator deviations and performance bands, validates the
//! date-range filter, and validates and tracks remediation action plans.
//! Presentation, charts and data fetching live in the host.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod rules;
