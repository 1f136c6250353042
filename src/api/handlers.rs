//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::generate_salary_slip;
use crate::calendar::{month_summary, parse_calendar_date};
use crate::error::EngineError;
use crate::models::{HolidayEntry, PayMonth};

use super::request::{CustomHolidayRequest, SalarySlipRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary-slip", post(salary_slip_handler))
        .route("/holidays/custom", post(add_custom_holiday_handler))
        .route("/holidays/custom/:date", delete(remove_custom_holiday_handler))
        .route("/holidays/:year", get(list_holidays_handler))
        .route("/calendar/:year/:month", get(calendar_handler))
        .with_state(state)
}

/// Response body for `GET /holidays/:year`.
#[derive(Debug, Clone, Serialize)]
pub struct HolidayListResponse {
    /// The requested year.
    pub year: i32,
    /// Published and custom holidays, ascending by date.
    pub holidays: Vec<HolidayEntry>,
}

/// Handler for POST /salary-slip.
///
/// Accepts an employee, attendance counts and a month and returns the
/// generated salary slip.
async fn salary_slip_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalarySlipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary slip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let period = match PayMonth::new(request.year, request.month) {
        Ok(period) => period,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let start_time = Instant::now();
    match generate_salary_slip(&request.employee, &request.attendance, period, state.rules()) {
        Ok(slip) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %slip.employee.employee_id,
                period = %slip.period,
                net_salary = %slip.salary.net_salary,
                warnings = slip.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Salary slip generated"
            );
            json_response(StatusCode::OK, slip)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /holidays/:year.
///
/// Returns published and custom holidays for the year. A year with no
/// published table yields only its custom holidays.
async fn list_holidays_handler(
    State(state): State<AppState>,
    year: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let year = match year {
        Ok(Path(year)) => year,
        Err(rejection) => return path_rejection_response(rejection, correlation_id),
    };

    let holidays = state.holidays().all_holidays(year);
    info!(
        correlation_id = %correlation_id,
        year,
        count = holidays.len(),
        "Listed holidays"
    );
    json_response(StatusCode::OK, HolidayListResponse { year, holidays })
}

/// Handler for POST /holidays/custom.
///
/// Adds (or renames) a custom holiday and returns the stored entry.
async fn add_custom_holiday_handler(
    State(state): State<AppState>,
    payload: Result<Json<CustomHolidayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing custom holiday request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let date = match parse_calendar_date(&request.date) {
        Ok(date) => date,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let name = request.name.trim();
    if name.is_empty() {
        warn!(correlation_id = %correlation_id, "Custom holiday name is empty");
        return ApiErrorResponse::bad_request(ApiError::validation_error(
            "holiday name must not be empty",
        ))
        .into_response();
    }

    let entry = HolidayEntry::new(date, name);
    state.holidays_mut().add_custom_holiday(entry.date, entry.name.clone());
    info!(correlation_id = %correlation_id, date = %date, "Custom holiday stored");
    json_response(StatusCode::CREATED, entry)
}

/// Handler for DELETE /holidays/custom/:date.
///
/// Removing a date with no custom holiday still succeeds.
async fn remove_custom_holiday_handler(
    State(state): State<AppState>,
    date: Result<Path<String>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let raw = match date {
        Ok(Path(raw)) => raw,
        Err(rejection) => return path_rejection_response(rejection, correlation_id),
    };

    let date = match parse_calendar_date(&raw) {
        Ok(date) => date,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let removed = state.holidays_mut().remove_custom_holiday(date);
    info!(
        correlation_id = %correlation_id,
        date = %date,
        removed,
        "Processed custom holiday removal"
    );
    StatusCode::NO_CONTENT.into_response()
}

/// Handler for GET /calendar/:year/:month.
///
/// Returns the day-by-day classification of the month.
async fn calendar_handler(
    State(state): State<AppState>,
    params: Result<Path<(i32, u32)>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (year, month) = match params {
        Ok(Path(params)) => params,
        Err(rejection) => return path_rejection_response(rejection, correlation_id),
    };

    let period = match PayMonth::new(year, month) {
        Ok(period) => period,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let summary = month_summary(period, &state.holidays());
    info!(
        correlation_id = %correlation_id,
        period = %period,
        working_days = summary.working_days,
        "Built month summary"
    );
    json_response(StatusCode::OK, summary)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn path_rejection_response(rejection: PathRejection, correlation_id: Uuid) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Invalid path parameters"
    );
    ApiErrorResponse::bad_request(ApiError::validation_error(body_text)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayRegistry;
    use crate::config::PayrollRules;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::with_registry(PayrollRules::default(), HolidayRegistry::builtin())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_salary_slip_returns_200() {
        let router = create_router(create_test_state());
        let body = r#"{
            "employee": {"employee_id": "EMP-001", "name": "Asha Rao", "monthly_salary": "44000"},
            "attendance": {"present_days": "22", "total_working_days": "22"},
            "year": 2025,
            "month": 2
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/salary-slip")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let json = body_json(response).await;
        assert_eq!(json["salary"]["per_day_salary"], "2000.00");
        assert_eq!(json["salary"]["net_salary"], "44000.00");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/salary-slip")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_invalid_month_returns_invalid_period() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/calendar/2025/13")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_non_numeric_year_is_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/holidays/next-year")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_blank_holiday_name_rejected() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/holidays/custom")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"date": "2025-12-31", "name": "   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
