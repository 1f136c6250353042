//! Salary slip models.
//!
//! This module contains the [`SalarySlip`] type and its associated structures
//! that capture the output of a monthly salary calculation: attendance,
//! deductions, additions, net pay and the audit trace explaining each figure.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceCounts, EmployeeSalaryProfile, PayMonth};

/// Itemized salary deductions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Per-day salary times absent days.
    pub absent_deduction: Decimal,
    /// Half the per-day salary times half days.
    pub half_day_deduction: Decimal,
    /// Per-day salary times unpaid leave days.
    pub unpaid_leave_deduction: Decimal,
    /// Sum of the three deductions above.
    pub total_deductions: Decimal,
}

/// Amounts added on top of the gross salary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryAdditions {
    /// Pay for approved overtime hours.
    pub overtime_pay: Decimal,
}

/// The monetary part of a salary slip. All amounts have two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The monthly salary before deductions.
    pub gross_salary: Decimal,
    /// Gross salary divided by the working days in the month.
    pub per_day_salary: Decimal,
    /// Itemized deductions.
    pub deductions: DeductionBreakdown,
    /// Itemized additions.
    pub additions: SalaryAdditions,
    /// Gross minus deductions plus additions, never below zero.
    pub net_salary: Decimal,
}

/// Attendance counts as reported on the slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipAttendance {
    /// The counts supplied by the attendance subsystem.
    #[serde(flatten)]
    pub counts: AttendanceCounts,
    /// Attended days as a whole-number percentage of working days.
    pub attendance_percentage: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inconsistent input that did not stop the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The ordered record of every rule applied while building a slip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete salary slip for one employee and one pay month.
///
/// A slip is created fresh on every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySlip {
    /// Unique identifier for this slip.
    pub slip_id: Uuid,
    /// The employee the slip is for.
    pub employee: EmployeeSalaryProfile,
    /// The month the slip covers.
    pub period: PayMonth,
    /// Attendance summary.
    pub attendance: SlipAttendance,
    /// Salary figures.
    pub salary: SalaryBreakdown,
    /// When the slip was generated.
    pub generated_at: DateTime<Utc>,
    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_slip() -> SalarySlip {
        SalarySlip {
            slip_id: Uuid::nil(),
            employee: EmployeeSalaryProfile {
                employee_id: "EMP-001".to_string(),
                name: "Asha Rao".to_string(),
                department: "Engineering".to_string(),
                monthly_salary: dec("50000"),
            },
            period: PayMonth::new(2025, 4).unwrap(),
            attendance: SlipAttendance {
                counts: AttendanceCounts {
                    present_days: dec("20"),
                    absent_days: dec("2"),
                    total_working_days: dec("22"),
                    ..Default::default()
                },
                attendance_percentage: dec("91"),
            },
            salary: SalaryBreakdown {
                gross_salary: dec("50000.00"),
                per_day_salary: dec("2272.73"),
                deductions: DeductionBreakdown {
                    absent_deduction: dec("4545.45"),
                    half_day_deduction: dec("0.00"),
                    unpaid_leave_deduction: dec("0.00"),
                    total_deductions: dec("4545.45"),
                },
                additions: SalaryAdditions {
                    overtime_pay: dec("0.00"),
                },
                net_salary: dec("45454.55"),
            },
            generated_at: DateTime::parse_from_rfc3339("2025-05-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_slip_serialization_shape() {
        let json = serde_json::to_value(sample_slip()).unwrap();

        assert_eq!(json["slip_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["period"]["year"], 2025);
        assert_eq!(json["period"]["month"], 4);
        assert_eq!(json["salary"]["gross_salary"], "50000.00");
        assert_eq!(json["salary"]["deductions"]["absent_deduction"], "4545.45");
        assert_eq!(json["salary"]["additions"]["overtime_pay"], "0.00");
        assert_eq!(json["salary"]["net_salary"], "45454.55");
        assert_eq!(json["generated_at"], "2025-05-01T10:00:00Z");
    }

    #[test]
    fn test_attendance_counts_are_flattened() {
        let json = serde_json::to_value(sample_slip()).unwrap();

        assert_eq!(json["attendance"]["present_days"], "20");
        assert_eq!(json["attendance"]["absent_days"], "2");
        assert_eq!(json["attendance"]["attendance_percentage"], "91");
    }

    #[test]
    fn test_slip_deserializes_from_its_own_output() {
        let slip = sample_slip();
        let json = serde_json::to_string(&slip).unwrap();
        let parsed: SalarySlip = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slip);
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "ATTENDANCE_EXCEEDS_WORKING_DAYS".to_string(),
            message: "23 category days recorded against 22 working days".to_string(),
            severity: "medium".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"ATTENDANCE_EXCEEDS_WORKING_DAYS\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }
}
