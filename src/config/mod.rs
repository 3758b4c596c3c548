//! Configuration loading and management for the Pay Calculation Engine.
//!
//! This module provides the rate schedule used by the calculator: the shift
//! boundaries, the per-band hourly rates, and a YAML loader for overriding
//! the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use sitter_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/babysitter").unwrap();
//! println!("Loaded schedule: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateTable, ScheduleConfig, ScheduleMetadata, ShiftBoundaries};
