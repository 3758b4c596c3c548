//! Pay Calculation Engine for babysitter shifts.
//!
//! This crate computes a babysitter's pay for a single evening shift from
//! wall-clock start/end times, a fixed per-sitter bedtime, and three hourly
//! rates tied to time-of-night bands (standard, post-bedtime, post-midnight).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
