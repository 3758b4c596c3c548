//! Core data models for the Pay Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_breakdown;
mod shift;
mod time_of_day;

pub use pay_breakdown::{AuditStep, PayBreakdown, PayLine, RateBand};
pub use shift::Shift;
pub use time_of_day::TimeOfDay;
