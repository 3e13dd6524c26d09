//! HTTP request handlers for the wage calculation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_wage;
use crate::config::ConfigLoader;
use crate::models::{
    Advance, AttendanceRecord, AttendanceTally, AuditTrace, CalculationOutcome,
    CompensationProfile, Period, advances_total,
};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the calculated payroll result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employee_id = request.employee_id;
    let period: Period = request.period.into();
    let profile: CompensationProfile = request.compensation.into();
    let attendance: Vec<AttendanceRecord> =
        request.attendance.into_iter().map(Into::into).collect();
    let advances: Vec<Advance> = request.advances.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match perform_calculation(
        &employee_id,
        &period,
        &profile,
        &attendance,
        &advances,
        state.config(),
    ) {
        Ok(outcome) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                paid_days = outcome.payroll.paid_days,
                net_salary = %outcome.payroll.net_salary,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(outcome),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the wage calculation for one employee and period.
fn perform_calculation(
    employee_id: &str,
    period: &Period,
    profile: &CompensationProfile,
    attendance: &[AttendanceRecord],
    advances: &[Advance],
    config: &ConfigLoader,
) -> Result<CalculationOutcome, crate::error::EngineError> {
    let start_time = Instant::now();

    let tally = AttendanceTally::from_records(attendance)?;
    let advances_sum = advances_total(advances, period);

    // Rate lookup keys off the period end date
    let rates = config.effective_rates(period.end_date)?;

    let calculation = calculate_wage(profile, &tally, rates, advances_sum, config.policy())?;

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationOutcome {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee_id.to_string(),
        period: period.clone(),
        payroll: calculation.result.rounded(),
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            duration_us,
        },
    })
}
