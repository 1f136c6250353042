//! Attendance inputs for salary calculation.
//!
//! [`AttendanceCounts`] is produced by the external attendance subsystem;
//! [`LeaveCounts`] and [`PerformanceMetrics`] are the narrower inputs the
//! individual salary rules take.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Per-employee attendance totals for one pay month.
///
/// Day counts are decimals so that fractional leave can be expressed. Every
/// field defaults to zero when absent from the input.
///
/// The category days are expected not to exceed `total_working_days`, but
/// that is not enforced here: salary slip generation records a warning and
/// continues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceCounts {
    /// Days marked present in the office.
    pub present_days: Decimal,
    /// Days absent without leave.
    pub absent_days: Decimal,
    /// Days marked as half days.
    pub half_days: Decimal,
    /// Days of approved unpaid leave.
    pub unpaid_leave_days: Decimal,
    /// Days of approved paid leave.
    pub paid_leave_days: Decimal,
    /// Days worked from home.
    pub wfh_days: Decimal,
    /// Working days in the period according to the attendance subsystem.
    pub total_working_days: Decimal,
    /// Approved overtime hours.
    pub overtime_hours: Decimal,
}

impl AttendanceCounts {
    /// Returns an error naming the first negative field, if any.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("present_days", self.present_days),
            ("absent_days", self.absent_days),
            ("half_days", self.half_days),
            ("unpaid_leave_days", self.unpaid_leave_days),
            ("paid_leave_days", self.paid_leave_days),
            ("wfh_days", self.wfh_days),
            ("total_working_days", self.total_working_days),
            ("overtime_hours", self.overtime_hours),
        ];
        for (field, value) in fields {
            ensure_non_negative(field, value)?;
        }
        Ok(())
    }

    /// Sum of every day category.
    ///
    /// # Errors
    ///
    /// [`EngineError::CalculationError`] if the sum overflows.
    pub fn category_days(&self) -> EngineResult<Decimal> {
        sum_days(
            &[
                self.present_days,
                self.absent_days,
                self.half_days,
                self.unpaid_leave_days,
                self.paid_leave_days,
                self.wfh_days,
            ],
            "category days",
        )
    }

    /// Days that count as attended: present, paid leave and work from home.
    ///
    /// # Errors
    ///
    /// [`EngineError::CalculationError`] if the sum overflows.
    pub fn attended_days(&self) -> EngineResult<Decimal> {
        sum_days(
            &[self.present_days, self.paid_leave_days, self.wfh_days],
            "attended days",
        )
    }

    /// The subset of counts that drives salary deductions.
    pub fn leave_counts(&self) -> LeaveCounts {
        LeaveCounts {
            absent_days: self.absent_days,
            half_days: self.half_days,
            unpaid_leave_days: self.unpaid_leave_days,
        }
    }
}

/// Day counts that reduce pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveCounts {
    /// Days absent without leave.
    pub absent_days: Decimal,
    /// Half days; each costs half a day's pay.
    pub half_days: Decimal,
    /// Days of unpaid leave.
    pub unpaid_leave_days: Decimal,
}

/// Scores that decide the performance bonus tier, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Attendance percentage for the period.
    pub attendance_percentage: Decimal,
    /// Share of assigned tasks completed.
    pub task_completion_rate: Decimal,
    /// Punctuality score.
    pub punctuality_score: Decimal,
}

fn sum_days(days: &[Decimal], what: &str) -> EngineResult<Decimal> {
    days.iter().try_fold(Decimal::ZERO, |total, value| {
        total
            .checked_add(*value)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("decimal overflow while computing {}", what),
            })
    })
}

/// Rejects negative values with [`EngineError::InvalidArgument`].
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::InvalidArgument {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(())
}
