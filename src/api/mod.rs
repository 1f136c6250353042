//! HTTP API module for the Payroll Engine.
//!
//! This module provides REST endpoints for salary slips, the holiday
//! registry and the monthly attendance calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{HolidayListResponse, create_router};
pub use request::{CustomHolidayRequest, SalarySlipRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
