//! Performance bonus calculation.

use rust_decimal::Decimal;

use crate::config::BonusTier;
use crate::error::EngineResult;
use crate::models::{PerformanceMetrics, ensure_non_negative};

use super::per_day::checked_product;

/// Returns the first tier whose thresholds `metrics` meets, if any.
///
/// Every threshold is inclusive: a score exactly at the minimum qualifies.
pub fn matching_bonus_tier<'a>(
    metrics: &PerformanceMetrics,
    tiers: &'a [BonusTier],
) -> Option<&'a BonusTier> {
    tiers.iter().find(|tier| {
        metrics.attendance_percentage >= tier.min_attendance_percentage
            && metrics.task_completion_rate >= tier.min_task_completion_rate
            && metrics.punctuality_score >= tier.min_punctuality_score
    })
}

/// Calculates the performance bonus for a month.
///
/// Tiers are checked in order and the first one fully met applies; no match
/// means no bonus.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_performance_bonus;
/// use payroll_engine::config::default_bonus_tiers;
/// use payroll_engine::models::PerformanceMetrics;
/// use rust_decimal::Decimal;
///
/// let metrics = PerformanceMetrics {
///     attendance_percentage: Decimal::from(96),
///     task_completion_rate: Decimal::from(91),
///     punctuality_score: Decimal::from(91),
/// };
/// let bonus = calculate_performance_bonus(Decimal::from(50000), &metrics, &default_bonus_tiers()).unwrap();
/// assert_eq!(bonus, Decimal::from(5000));
/// ```
pub fn calculate_performance_bonus(
    monthly_salary: Decimal,
    metrics: &PerformanceMetrics,
    tiers: &[BonusTier],
) -> EngineResult<Decimal> {
    ensure_non_negative("monthly_salary", monthly_salary)?;
    ensure_non_negative("attendance_percentage", metrics.attendance_percentage)?;
    ensure_non_negative("task_completion_rate", metrics.task_completion_rate)?;
    ensure_non_negative("punctuality_score", metrics.punctuality_score)?;

    match matching_bonus_tier(metrics, tiers) {
        Some(tier) => checked_product(monthly_salary, tier.bonus_rate, "performance bonus"),
        None => Ok(Decimal::ZERO),
    }
}
