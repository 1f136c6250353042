//! Prorated salary for employees joining part way through a month.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::working_days_in_month;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayMonth, ensure_non_negative};

use super::per_day::{checked_product, overflow};

/// Calculates the salary owed for the working days of `period` on or after
/// `joining_date`.
///
/// Joining before the month pays the full salary; joining after it pays
/// nothing. The product is taken before dividing so that a full month comes
/// back exactly.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::calculate_prorated_salary;
/// use payroll_engine::models::PayMonth;
/// use rust_decimal::Decimal;
///
/// // Joining on Saturday 15 February 2025 (a working Saturday) leaves 11 of
/// // the month's 22 working days.
/// let salary = calculate_prorated_salary(
///     Decimal::from(44000),
///     NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
///     PayMonth::new(2025, 2).unwrap(),
/// ).unwrap();
/// assert_eq!(salary, Decimal::from(22000));
/// ```
pub fn calculate_prorated_salary(
    monthly_salary: Decimal,
    joining_date: NaiveDate,
    period: PayMonth,
) -> EngineResult<Decimal> {
    ensure_non_negative("monthly_salary", monthly_salary)?;

    let working_days = working_days_in_month(period);
    if working_days.is_empty() {
        return Err(EngineError::InvalidPeriod {
            year: period.year(),
            month: period.month(),
            message: "month has no working days".to_string(),
        });
    }

    let days_worked = working_days.iter().filter(|d| **d >= joining_date).count();
    let earned = checked_product(
        monthly_salary,
        Decimal::from(days_worked),
        "prorated salary",
    )?;
    earned
        .checked_div(Decimal::from(working_days.len()))
        .ok_or_else(|| overflow("prorated salary"))
}
