//! Employee salary profile.
//!
//! The identifying fields are supplied by the employee directory and passed
//! through to salary slips untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The salary-relevant view of an employee.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::EmployeeSalaryProfile;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeSalaryProfile {
///     employee_id: "EMP-001".to_string(),
///     name: "Asha Rao".to_string(),
///     department: "Engineering".to_string(),
///     monthly_salary: Decimal::new(50000, 0),
/// };
/// assert_eq!(employee.monthly_salary, Decimal::new(50000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalaryProfile {
    /// Identifier from the employee directory.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Department name.
    #[serde(default)]
    pub department: String,
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
}
