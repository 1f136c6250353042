//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod holiday;
mod period;
mod salary_slip;

pub(crate) use attendance::ensure_non_negative;
pub use attendance::{AttendanceCounts, LeaveCounts, PerformanceMetrics};
pub use employee::EmployeeSalaryProfile;
pub use holiday::HolidayEntry;
pub use period::PayMonth;
pub use salary_slip::{
    AuditStep, AuditTrace, AuditWarning, DeductionBreakdown, SalaryAdditions, SalaryBreakdown,
    SalarySlip, SlipAttendance,
};
