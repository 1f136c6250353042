//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/salary-slip`
//! and `/holidays/custom` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceCounts, EmployeeSalaryProfile};

/// Request body for the `/salary-slip` endpoint.
///
/// Months are 1-based (1 = January).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalarySlipRequest {
    /// The employee the slip is for.
    pub employee: EmployeeSalaryProfile,
    /// Attendance counts for the month. Missing counts default to zero.
    #[serde(default)]
    pub attendance: AttendanceCounts,
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1 to 12.
    pub month: u32,
}

/// Request body for the `/holidays/custom` endpoint.
///
/// The date is kept as text so that a malformed date is reported as
/// `INVALID_DATE` rather than as a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomHolidayRequest {
    /// The holiday date as `YYYY-MM-DD`.
    pub date: String,
    /// The holiday name.
    pub name: String,
}
