//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::HolidayEntry;

/// Hours in a standard working day, used to derive the hourly rate.
pub const STANDARD_HOURS_PER_DAY: Decimal = Decimal::from_parts(9, 0, 0, false, 0);

/// Default overtime multiplier (150%).
pub const DEFAULT_OVERTIME_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// One tier of the performance bonus.
///
/// A tier applies only when every metric meets its minimum (inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTier {
    /// Minimum attendance percentage.
    pub min_attendance_percentage: Decimal,
    /// Minimum task completion rate.
    pub min_task_completion_rate: Decimal,
    /// Minimum punctuality score.
    pub min_punctuality_score: Decimal,
    /// Bonus as a fraction of monthly salary (0.10 = 10%).
    pub bonus_rate: Decimal,
}

impl BonusTier {
    /// Creates a tier from whole-number thresholds and a percentage bonus.
    pub fn new(attendance: i64, task_completion: i64, punctuality: i64, bonus_percent: i64) -> Self {
        Self {
            min_attendance_percentage: Decimal::from(attendance),
            min_task_completion_rate: Decimal::from(task_completion),
            min_punctuality_score: Decimal::from(punctuality),
            bonus_rate: Decimal::new(bonus_percent, 2),
        }
    }
}

/// The standard bonus tiers, best first: 10%, 5%, 2%.
pub fn default_bonus_tiers() -> Vec<BonusTier> {
    vec![
        BonusTier::new(95, 90, 90, 10),
        BonusTier::new(90, 80, 80, 5),
        BonusTier::new(85, 70, 70, 2),
    ]
}

/// Payroll rules from payroll.yaml.
///
/// Every field is optional in the file; missing fields fall back to the
/// built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollRules {
    /// Hours in a standard working day.
    pub standard_hours_per_day: Decimal,
    /// Overtime pay multiplier.
    pub overtime_rate: Decimal,
    /// Bonus tiers, checked in order; the first tier fully met applies.
    pub bonus_tiers: Vec<BonusTier>,
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            standard_hours_per_day: STANDARD_HOURS_PER_DAY,
            overtime_rate: DEFAULT_OVERTIME_RATE,
            bonus_tiers: default_bonus_tiers(),
        }
    }
}

/// A holiday table file (holidays/<year>.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year every entry must fall in.
    pub year: i32,
    /// The holidays of that year.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}
