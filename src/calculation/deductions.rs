//! Attendance deductions.
//!
//! Absent days and unpaid leave cost one per-day salary each; a half day
//! costs half of one.

use rust_decimal::Decimal;

use crate::calendar::working_days_in_month;
use crate::error::EngineResult;
use crate::models::{DeductionBreakdown, LeaveCounts, PayMonth, ensure_non_negative};

use super::per_day::{checked_product, checked_sum, per_day_rate};

/// Deduction for days absent without leave.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_absent_deduction;
/// use payroll_engine::models::PayMonth;
/// use rust_decimal::Decimal;
///
/// // 50000 over February 2025's 22 working days, two days absent.
/// let deduction = calculate_absent_deduction(
///     Decimal::from(50000),
///     Decimal::from(2),
///     PayMonth::new(2025, 2).unwrap(),
/// ).unwrap();
/// assert_eq!(deduction.round_dp(2), Decimal::new(454545, 2));
/// ```
pub fn calculate_absent_deduction(
    monthly_salary: Decimal,
    absent_days: Decimal,
    period: PayMonth,
) -> EngineResult<Decimal> {
    ensure_non_negative("absent_days", absent_days)?;
    let per_day = validated_per_day(monthly_salary, period)?;
    checked_product(per_day, absent_days, "absent deduction")
}

/// Deduction for half days: half the per-day salary for each.
pub fn calculate_half_day_deduction(
    monthly_salary: Decimal,
    half_days: Decimal,
    period: PayMonth,
) -> EngineResult<Decimal> {
    ensure_non_negative("half_days", half_days)?;
    let per_day = validated_per_day(monthly_salary, period)?;
    half_day_amount(per_day, half_days)
}

/// Deduction for days of unpaid leave.
pub fn calculate_unpaid_leave_deduction(
    monthly_salary: Decimal,
    unpaid_leave_days: Decimal,
    period: PayMonth,
) -> EngineResult<Decimal> {
    ensure_non_negative("unpaid_leave_days", unpaid_leave_days)?;
    let per_day = validated_per_day(monthly_salary, period)?;
    checked_product(per_day, unpaid_leave_days, "unpaid leave deduction")
}

/// Calculates all three deductions and their total.
///
/// The per-day salary is computed once and shared by every component.
pub fn calculate_total_deductions(
    monthly_salary: Decimal,
    period: PayMonth,
    leave: &LeaveCounts,
) -> EngineResult<DeductionBreakdown> {
    ensure_non_negative("absent_days", leave.absent_days)?;
    ensure_non_negative("half_days", leave.half_days)?;
    ensure_non_negative("unpaid_leave_days", leave.unpaid_leave_days)?;
    let per_day = validated_per_day(monthly_salary, period)?;
    deductions_at_rate(per_day, leave)
}

/// Builds the deduction breakdown for an already-computed per-day rate.
pub(crate) fn deductions_at_rate(
    per_day: Decimal,
    leave: &LeaveCounts,
) -> EngineResult<DeductionBreakdown> {
    let absent_deduction = checked_product(per_day, leave.absent_days, "absent deduction")?;
    let half_day_deduction = half_day_amount(per_day, leave.half_days)?;
    let unpaid_leave_deduction =
        checked_product(per_day, leave.unpaid_leave_days, "unpaid leave deduction")?;

    let total_deductions = checked_sum(
        &[absent_deduction, half_day_deduction, unpaid_leave_deduction],
        "total deductions",
    )?;

    Ok(DeductionBreakdown {
        absent_deduction,
        half_day_deduction,
        unpaid_leave_deduction,
        total_deductions,
    })
}

fn half_day_amount(per_day: Decimal, half_days: Decimal) -> EngineResult<Decimal> {
    Ok(checked_product(per_day, half_days, "half-day deduction")? / Decimal::TWO)
}

fn validated_per_day(monthly_salary: Decimal, period: PayMonth) -> EngineResult<Decimal> {
    ensure_non_negative("monthly_salary", monthly_salary)?;
    per_day_rate(monthly_salary, working_days_in_month(period).len(), period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn february() -> PayMonth {
        // 22 working days
        PayMonth::new(2025, 2).unwrap()
    }

    fn april() -> PayMonth {
        // 24 working days
        PayMonth::new(2025, 4).unwrap()
    }

    #[test]
    fn test_absent_deduction_two_days_of_twenty_two() {
        let deduction = calculate_absent_deduction(dec("50000"), dec("2"), february()).unwrap();
        assert_eq!(deduction.round_dp(2), dec("4545.45"));
    }

    #[test]
    fn test_absent_deduction_uses_calendar_working_days() {
        let deduction = calculate_absent_deduction(dec("50000"), dec("2"), april()).unwrap();
        assert_eq!(deduction.round_dp(2), dec("4166.67"));
    }

    #[test]
    fn test_half_day_deduction_is_half_rate() {
        // per-day 2000, three half days = 3000
        let deduction = calculate_half_day_deduction(dec("44000"), dec("3"), february()).unwrap();
        assert_eq!(deduction, dec("3000"));
    }

    #[test]
    fn test_unpaid_leave_deduction() {
        let deduction =
            calculate_unpaid_leave_deduction(dec("48000"), dec("1.5"), april()).unwrap();
        assert_eq!(deduction, dec("3000"));
    }

    #[test]
    fn test_zero_days_deduct_nothing() {
        let deduction = calculate_absent_deduction(dec("50000"), Decimal::ZERO, april()).unwrap();
        assert_eq!(deduction, Decimal::ZERO);
    }

    #[test]
    fn test_negative_day_counts_rejected() {
        assert!(matches!(
            calculate_absent_deduction(dec("50000"), dec("-1"), april()),
            Err(EngineError::InvalidArgument { field, .. }) if field == "absent_days"
        ));
        assert!(matches!(
            calculate_half_day_deduction(dec("50000"), dec("-1"), april()),
            Err(EngineError::InvalidArgument { field, .. }) if field == "half_days"
        ));
        assert!(matches!(
            calculate_unpaid_leave_deduction(dec("50000"), dec("-1"), april()),
            Err(EngineError::InvalidArgument { field, .. }) if field == "unpaid_leave_days"
        ));
    }

    #[test]
    fn test_negative_salary_rejected() {
        assert!(matches!(
            calculate_absent_deduction(dec("-50000"), dec("1"), april()),
            Err(EngineError::InvalidArgument { field, .. }) if field == "monthly_salary"
        ));
    }

    #[test]
    fn test_total_deductions_sums_components() {
        let leave = LeaveCounts {
            absent_days: dec("2"),
            half_days: dec("1"),
            unpaid_leave_days: dec("1"),
        };
        let breakdown = calculate_total_deductions(dec("44000"), february(), &leave).unwrap();

        assert_eq!(breakdown.absent_deduction, dec("4000"));
        assert_eq!(breakdown.half_day_deduction, dec("1000"));
        assert_eq!(breakdown.unpaid_leave_deduction, dec("2000"));
        assert_eq!(breakdown.total_deductions, dec("7000"));
    }

    #[test]
    fn test_total_deductions_matches_individual_functions() {
        let leave = LeaveCounts {
            absent_days: dec("3"),
            half_days: dec("2"),
            unpaid_leave_days: dec("1"),
        };
        let salary = dec("61234.56");
        let breakdown = calculate_total_deductions(salary, april(), &leave).unwrap();

        assert_eq!(
            breakdown.absent_deduction,
            calculate_absent_deduction(salary, leave.absent_days, april()).unwrap()
        );
        assert_eq!(
            breakdown.half_day_deduction,
            calculate_half_day_deduction(salary, leave.half_days, april()).unwrap()
        );
        assert_eq!(
            breakdown.unpaid_leave_deduction,
            calculate_unpaid_leave_deduction(salary, leave.unpaid_leave_days, april()).unwrap()
        );
    }

    #[test]
    fn test_total_deductions_overflow_is_calculation_error() {
        // per-day 1, so each component equals its day count
        let huge = Decimal::from_scientific("5e28").unwrap();
        let leave = LeaveCounts {
            absent_days: huge,
            half_days: Decimal::ZERO,
            unpaid_leave_days: huge,
        };
        match calculate_total_deductions(dec("22"), february(), &leave) {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("total deductions"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
