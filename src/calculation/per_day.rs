//! Per-day salary calculation.
//!
//! The per-day rate is the monthly salary spread evenly over the working
//! days of the month. Every deduction and the overtime hourly rate derive
//! from it.

use rust_decimal::Decimal;

use crate::calendar::working_days_in_month;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayMonth, ensure_non_negative};

/// Calculates the salary earned per working day of `period`.
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`] if `monthly_salary` is negative
/// - [`EngineError::InvalidPeriod`] if the month has no working days
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_per_day_salary;
/// use payroll_engine::models::PayMonth;
/// use rust_decimal::Decimal;
///
/// // February 2025 has 22 working days.
/// let per_day = calculate_per_day_salary(Decimal::from(44000), PayMonth::new(2025, 2).unwrap()).unwrap();
/// assert_eq!(per_day, Decimal::from(2000));
/// ```
pub fn calculate_per_day_salary(monthly_salary: Decimal, period: PayMonth) -> EngineResult<Decimal> {
    ensure_non_negative("monthly_salary", monthly_salary)?;
    per_day_rate(monthly_salary, working_days_in_month(period).len(), period)
}

/// Divides `monthly_salary` by `working_days`, refusing an empty month.
pub(crate) fn per_day_rate(
    monthly_salary: Decimal,
    working_days: usize,
    period: PayMonth,
) -> EngineResult<Decimal> {
    if working_days == 0 {
        return Err(EngineError::InvalidPeriod {
            year: period.year(),
            month: period.month(),
            message: "month has no working days".to_string(),
        });
    }
    monthly_salary
        .checked_div(Decimal::from(working_days))
        .ok_or_else(|| overflow("per-day salary"))
}

/// Multiplies two decimals, reporting overflow as a calculation error.
pub(crate) fn checked_product(a: Decimal, b: Decimal, what: &str) -> EngineResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(what))
}

/// Adds up `values`, reporting overflow as a calculation error.
pub(crate) fn checked_sum(values: &[Decimal], what: &str) -> EngineResult<Decimal> {
    values.iter().try_fold(Decimal::ZERO, |total, value| {
        total.checked_add(*value).ok_or_else(|| overflow(what))
    })
}

/// Subtracts `b` from `a`, reporting overflow as a calculation error.
pub(crate) fn checked_difference(a: Decimal, b: Decimal, what: &str) -> EngineResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(what))
}

pub(crate) fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("decimal overflow while computing {}", what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn huge() -> Decimal {
        Decimal::from_scientific("5e28").unwrap()
    }

    fn month(y: i32, m: u32) -> PayMonth {
        PayMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_per_day_salary_february_2025() {
        assert_eq!(
            calculate_per_day_salary(dec("44000"), month(2025, 2)).unwrap(),
            dec("2000")
        );
    }

    #[test]
    fn test_per_day_salary_april_2025() {
        // April 2025 has 24 working days.
        let per_day = calculate_per_day_salary(dec("48000"), month(2025, 4)).unwrap();
        assert_eq!(per_day, dec("2000"));
    }

    #[test]
    fn test_zero_salary_gives_zero_rate() {
        assert_eq!(
            calculate_per_day_salary(Decimal::ZERO, month(2025, 4)).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_negative_salary_rejected() {
        match calculate_per_day_salary(dec("-1"), month(2025, 4)) {
            Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "monthly_salary"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_month_is_invalid_period() {
        match per_day_rate(dec("50000"), 0, month(2025, 4)) {
            Err(EngineError::InvalidPeriod { year, month, .. }) => {
                assert_eq!((year, month), (2025, 4));
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_checked_product_overflow() {
        assert!(matches!(
            checked_product(Decimal::MAX, dec("2"), "test"),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_checked_sum_adds_values() {
        assert_eq!(
            checked_sum(&[dec("1.5"), dec("2.25"), dec("3")], "test").unwrap(),
            dec("6.75")
        );
        assert_eq!(checked_sum(&[], "test").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_checked_sum_overflow() {
        match checked_sum(&[huge(), huge()], "total deductions") {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("total deductions"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_checked_difference_overflow() {
        assert_eq!(checked_difference(dec("10"), dec("4"), "test").unwrap(), dec("6"));
        assert!(matches!(
            checked_difference(Decimal::MIN, dec("1"), "test"),
            Err(EngineError::CalculationError { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_per_day_times_working_days_is_monthly_salary(
            salary_cents in 0i64..1_000_000_000,
            year in 1990i32..2100,
            m in 1u32..=12,
        ) {
            let salary = Decimal::new(salary_cents, 2);
            let period = month(year, m);
            let days = Decimal::from(working_days_in_month(period).len());
            let per_day = calculate_per_day_salary(salary, period).unwrap();
            let back = (per_day * days).round_dp(2);
            prop_assert_eq!(back, salary);
        }
    }
}
