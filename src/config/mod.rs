//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load payroll rules (standard hours,
//! overtime rate, bonus tiers) and per-year holiday tables from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Standard day: {} hours", config.rules().standard_hours_per_day);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BonusTier, DEFAULT_OVERTIME_RATE, HolidayFile, PayrollRules, STANDARD_HOURS_PER_DAY,
    default_bonus_tiers,
};
