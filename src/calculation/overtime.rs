//! Overtime pay calculation.
//!
//! The hourly rate is derived from the per-day salary and a fixed standard
//! day length; overtime hours are paid at that rate times the overtime
//! multiplier.

use rust_decimal::Decimal;

use crate::calendar::working_days_in_month;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayMonth, ensure_non_negative};

use super::per_day::{checked_product, overflow};

/// Calculates the hourly rate for `period`:
/// `monthly_salary / (working_days * standard_hours_per_day)`.
pub fn calculate_hourly_rate(
    monthly_salary: Decimal,
    period: PayMonth,
    standard_hours_per_day: Decimal,
) -> EngineResult<Decimal> {
    ensure_non_negative("monthly_salary", monthly_salary)?;
    if standard_hours_per_day <= Decimal::ZERO {
        return Err(EngineError::InvalidArgument {
            field: "standard_hours_per_day".to_string(),
            message: format!("must be positive (got {})", standard_hours_per_day),
        });
    }

    let working_days = working_days_in_month(period).len();
    if working_days == 0 {
        return Err(EngineError::InvalidPeriod {
            year: period.year(),
            month: period.month(),
            message: "month has no working days".to_string(),
        });
    }

    let standard_hours = checked_product(
        Decimal::from(working_days),
        standard_hours_per_day,
        "standard hours",
    )?;
    monthly_salary
        .checked_div(standard_hours)
        .ok_or_else(|| overflow("hourly rate"))
}

/// Calculates pay for `overtime_hours` in `period`.
///
/// Use [`DEFAULT_OVERTIME_RATE`](crate::config::DEFAULT_OVERTIME_RATE) and
/// [`STANDARD_HOURS_PER_DAY`](crate::config::STANDARD_HOURS_PER_DAY) for the
/// standard terms.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use payroll_engine::config::{DEFAULT_OVERTIME_RATE, STANDARD_HOURS_PER_DAY};
/// use payroll_engine::models::PayMonth;
/// use rust_decimal::Decimal;
///
/// // February 2025: 22 days x 9 hours = 198 standard hours; 19800 / 198 = 100 per hour.
/// let pay = calculate_overtime_pay(
///     Decimal::from(19800),
///     Decimal::from(4),
///     PayMonth::new(2025, 2).unwrap(),
///     DEFAULT_OVERTIME_RATE,
///     STANDARD_HOURS_PER_DAY,
/// ).unwrap();
/// assert_eq!(pay, Decimal::from(600));
/// ```
pub fn calculate_overtime_pay(
    monthly_salary: Decimal,
    overtime_hours: Decimal,
    period: PayMonth,
    overtime_rate: Decimal,
    standard_hours_per_day: Decimal,
) -> EngineResult<Decimal> {
    ensure_non_negative("overtime_hours", overtime_hours)?;
    ensure_non_negative("overtime_rate", overtime_rate)?;

    let hourly = calculate_hourly_rate(monthly_salary, period, standard_hours_per_day)?;
    let hours_pay = checked_product(hourly, overtime_hours, "overtime pay")?;
    checked_product(hours_pay, overtime_rate, "overtime pay")
}
