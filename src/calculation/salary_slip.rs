//! Salary slip generation.
//!
//! Combines the per-day rate, attendance deductions and overtime pay into a
//! [`SalarySlip`], recording each rule in the slip's audit trace. Every
//! monetary field on the slip is rounded to two decimal places and the
//! totals are derived from the rounded components, so the slip always adds
//! up on paper.

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::calendar::working_days_in_month;
use crate::config::PayrollRules;
use crate::error::EngineResult;
use crate::models::{
    AttendanceCounts, AuditStep, AuditTrace, AuditWarning, DeductionBreakdown,
    EmployeeSalaryProfile, PayMonth, SalaryAdditions, SalaryBreakdown, SalarySlip, SlipAttendance,
    ensure_non_negative,
};

use super::deductions::deductions_at_rate;
use super::net_salary::clamp_to_zero;
use super::overtime::calculate_overtime_pay;
use super::per_day::{checked_difference, checked_product, checked_sum, overflow, per_day_rate};

/// Generates the salary slip for `employee` over `period`.
///
/// Attendance counts whose categories add up to more than
/// `total_working_days` do not fail the calculation; they are reported as an
/// `ATTENDANCE_EXCEEDS_WORKING_DAYS` warning on the audit trace.
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`](crate::error::EngineError::InvalidArgument)
///   for a negative salary, count or rule value
/// - [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
///   if the month has no working days
/// - [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
///   if an amount or day total overflows
pub fn generate_salary_slip(
    employee: &EmployeeSalaryProfile,
    attendance: &AttendanceCounts,
    period: PayMonth,
    rules: &PayrollRules,
) -> EngineResult<SalarySlip> {
    ensure_non_negative("monthly_salary", employee.monthly_salary)?;
    attendance.validate()?;

    let mut trace = TraceRecorder::default();
    let monthly_salary = employee.monthly_salary;

    // Step 1: working days in the calendar month
    let working_days = working_days_in_month(period).len();
    trace.step(
        "working_days",
        "Working Days",
        serde_json::json!({ "period": period.to_string() }),
        serde_json::json!({ "working_days": working_days }),
        format!(
            "{} has {} working days after Sundays and the 2nd, 4th and 5th Saturdays",
            period, working_days
        ),
    );
    check_working_days(attendance, working_days, &employee.employee_id, &mut trace)?;

    // Step 2: per-day salary
    let per_day = per_day_rate(monthly_salary, working_days, period)?;
    trace.step(
        "per_day_salary",
        "Per-Day Salary",
        serde_json::json!({
            "monthly_salary": monthly_salary.to_string(),
            "working_days": working_days
        }),
        serde_json::json!({ "per_day_salary": money(per_day).to_string() }),
        format!(
            "{} / {} working days = {} per day",
            monthly_salary,
            working_days,
            money(per_day)
        ),
    );

    // Step 3: attendance deductions
    let exact = deductions_at_rate(per_day, &attendance.leave_counts())?;
    let deductions = rounded_deductions(&exact)?;
    trace.step(
        "attendance_deductions",
        "Attendance Deductions",
        serde_json::json!({
            "absent_days": attendance.absent_days.to_string(),
            "half_days": attendance.half_days.to_string(),
            "unpaid_leave_days": attendance.unpaid_leave_days.to_string()
        }),
        serde_json::json!({
            "absent_deduction": deductions.absent_deduction.to_string(),
            "half_day_deduction": deductions.half_day_deduction.to_string(),
            "unpaid_leave_deduction": deductions.unpaid_leave_deduction.to_string(),
            "total_deductions": deductions.total_deductions.to_string()
        }),
        format!(
            "Absent and unpaid leave days cost one day's pay each, half days cost half; total {}",
            deductions.total_deductions
        ),
    );

    // Step 4: overtime
    let overtime_pay = money(calculate_overtime_pay(
        monthly_salary,
        attendance.overtime_hours,
        period,
        rules.overtime_rate,
        rules.standard_hours_per_day,
    )?);
    trace.step(
        "overtime_pay",
        "Overtime Pay",
        serde_json::json!({
            "overtime_hours": attendance.overtime_hours.to_string(),
            "overtime_rate": rules.overtime_rate.to_string(),
            "standard_hours_per_day": rules.standard_hours_per_day.to_string()
        }),
        serde_json::json!({ "overtime_pay": overtime_pay.to_string() }),
        format!(
            "{} overtime hours at {}x the hourly rate of a {}-hour day",
            attendance.overtime_hours, rules.overtime_rate, rules.standard_hours_per_day
        ),
    );

    // Step 5: attendance percentage
    let attendance_percentage = attendance_percentage(attendance)?;
    let attended_days = attendance.attended_days()?;
    trace.step(
        "attendance_percentage",
        "Attendance Percentage",
        serde_json::json!({
            "attended_days": attended_days.to_string(),
            "total_working_days": attendance.total_working_days.to_string()
        }),
        serde_json::json!({ "attendance_percentage": attendance_percentage.to_string() }),
        "Present, paid leave and work-from-home days as a share of working days".to_string(),
    );

    // Step 6: net salary
    let gross_salary = money(monthly_salary);
    let net_salary = money(clamp_to_zero(checked_difference(
        checked_sum(&[gross_salary, overtime_pay], "net salary")?,
        deductions.total_deductions,
        "net salary",
    )?));
    trace.step(
        "net_salary",
        "Net Salary",
        serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "total_deductions": deductions.total_deductions.to_string(),
            "overtime_pay": overtime_pay.to_string()
        }),
        serde_json::json!({ "net_salary": net_salary.to_string() }),
        format!(
            "{} - {} + {} = {}, floored at zero",
            gross_salary, deductions.total_deductions, overtime_pay, net_salary
        ),
    );

    debug!(
        employee_id = %employee.employee_id,
        period = %period,
        net_salary = %net_salary,
        warnings = trace.warnings.len(),
        "Salary slip generated"
    );

    Ok(SalarySlip {
        slip_id: Uuid::new_v4(),
        employee: employee.clone(),
        period,
        attendance: SlipAttendance {
            counts: attendance.clone(),
            attendance_percentage,
        },
        salary: SalaryBreakdown {
            gross_salary,
            per_day_salary: money(per_day),
            deductions,
            additions: SalaryAdditions { overtime_pay },
            net_salary,
        },
        generated_at: Utc::now(),
        audit_trace: trace.finish(),
    })
}

/// Attended days as a whole-number percentage of `total_working_days`.
///
/// Zero working days yields zero rather than an error.
pub fn attendance_percentage(attendance: &AttendanceCounts) -> EngineResult<Decimal> {
    if attendance.total_working_days.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let scaled = checked_product(
        attendance.attended_days()?,
        Decimal::ONE_HUNDRED,
        "attendance percentage",
    )?;
    let ratio = scaled
        .checked_div(attendance.total_working_days)
        .ok_or_else(|| overflow("attendance percentage"))?;
    Ok(ratio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Rounds to two decimal places, always keeping the scale at two.
fn money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

fn rounded_deductions(exact: &DeductionBreakdown) -> EngineResult<DeductionBreakdown> {
    let absent_deduction = money(exact.absent_deduction);
    let half_day_deduction = money(exact.half_day_deduction);
    let unpaid_leave_deduction = money(exact.unpaid_leave_deduction);
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

fn check_working_days(
    attendance: &AttendanceCounts,
    calendar_working_days: usize,
    employee_id: &str,
    trace: &mut TraceRecorder,
) -> EngineResult<()> {
    let category_days = attendance.category_days()?;
    if category_days > attendance.total_working_days {
        warn!(
            employee_id = %employee_id,
            category_days = %category_days,
            total_working_days = %attendance.total_working_days,
            "Attendance categories exceed working days"
        );
        trace.warn(
            "ATTENDANCE_EXCEEDS_WORKING_DAYS",
            format!(
                "{} category days recorded against {} working days",
                category_days, attendance.total_working_days
            ),
            "medium",
        );
    }

    let calendar = Decimal::from(calendar_working_days);
    if !attendance.total_working_days.is_zero() && attendance.total_working_days != calendar {
        trace.warn(
            "WORKING_DAYS_MISMATCH",
            format!(
                "Attendance reports {} working days but the calendar has {}",
                attendance.total_working_days, calendar
            ),
            "low",
        );
    }
    Ok(())
}

#[derive(Default)]
struct TraceRecorder {
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

impl TraceRecorder {
    fn step(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn warn(&mut self, code: &str, message: String, severity: &str) {
        self.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity: severity.to_string(),
        });
    }

    fn finish(self) -> AuditTrace {
        AuditTrace {
            steps: self.steps,
            warnings: self.warnings,
        }
    }
}
