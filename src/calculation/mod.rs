//! Salary calculation for the payroll engine.
//!
//! This module contains the per-day salary rate, attendance deductions
//! (absent days, half days, unpaid leave), net salary with caller-supplied
//! adjustments, overtime pay, the tiered performance bonus, prorated salary
//! for mid-month joiners, and salary slip generation with an audit trace.
//!
//! Individual functions return full-precision decimals; only the salary slip
//! rounds to two decimal places.

mod deductions;
mod net_salary;
mod overtime;
mod per_day;
mod performance_bonus;
mod proration;
mod salary_slip;

pub use deductions::{
    calculate_absent_deduction, calculate_half_day_deduction, calculate_total_deductions,
    calculate_unpaid_leave_deduction,
};
pub use net_salary::{NetSalaryResult, calculate_net_salary};
pub use overtime::{calculate_hourly_rate, calculate_overtime_pay};
pub use per_day::calculate_per_day_salary;
pub use performance_bonus::{calculate_performance_bonus, matching_bonus_tier};
pub use proration::calculate_prorated_salary;
pub use salary_slip::{attendance_percentage, generate_salary_slip};
