//! Net salary calculation.
//!
//! Net salary is the monthly salary less attendance deductions and any
//! additional deductions, plus bonuses. It is clamped at zero: deductions can
//! wipe out a month's pay but never produce a negative salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::working_days_in_month;
use crate::error::EngineResult;
use crate::models::{DeductionBreakdown, LeaveCounts, PayMonth, ensure_non_negative};

use super::deductions::deductions_at_rate;
use super::per_day::{checked_difference, checked_sum, per_day_rate};

/// The result of a net salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalaryResult {
    /// The monthly salary the calculation started from.
    pub monthly_salary: Decimal,
    /// Attendance deductions.
    pub deductions: DeductionBreakdown,
    /// Deductions supplied by the caller (e.g. advances, penalties).
    pub additional_deductions: Decimal,
    /// Bonuses supplied by the caller.
    pub bonuses: Decimal,
    /// The resulting net salary, never negative.
    pub net_salary: Decimal,
}

/// Calculates net salary for a month.
///
/// `net = max(0, monthly_salary - attendance deductions - additional_deductions + bonuses)`
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_net_salary;
/// use payroll_engine::models::{LeaveCounts, PayMonth};
/// use rust_decimal::Decimal;
///
/// let leave = LeaveCounts { absent_days: Decimal::from(40), ..Default::default() };
/// let result = calculate_net_salary(
///     Decimal::from(10000),
///     PayMonth::new(2025, 1).unwrap(),
///     &leave,
///     Decimal::ZERO,
///     Decimal::ZERO,
/// ).unwrap();
/// assert_eq!(result.net_salary, Decimal::ZERO);
/// ```
pub fn calculate_net_salary(
    monthly_salary: Decimal,
    period: PayMonth,
    leave: &LeaveCounts,
    additional_deductions: Decimal,
    bonuses: Decimal,
) -> EngineResult<NetSalaryResult> {
    ensure_non_negative("monthly_salary", monthly_salary)?;
    ensure_non_negative("absent_days", leave.absent_days)?;
    ensure_non_negative("half_days", leave.half_days)?;
    ensure_non_negative("unpaid_leave_days", leave.unpaid_leave_days)?;
    ensure_non_negative("additional_deductions", additional_deductions)?;
    ensure_non_negative("bonuses", bonuses)?;

    let per_day = per_day_rate(monthly_salary, working_days_in_month(period).len(), period)?;
    let deductions = deductions_at_rate(per_day, leave)?;
    let credited = checked_sum(&[monthly_salary, bonuses], "net salary")?;
    let debited = checked_sum(
        &[deductions.total_deductions, additional_deductions],
        "net salary",
    )?;
    let net_salary = clamp_to_zero(checked_difference(credited, debited, "net salary")?);

    Ok(NetSalaryResult {
        monthly_salary,
        deductions,
        additional_deductions,
        bonuses,
        net_salary,
    })
}

/// Floors a monetary amount at zero.
pub(crate) fn clamp_to_zero(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}
