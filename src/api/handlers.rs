//! HTTP request handlers for the Shift Earnings API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_shift_earnings, record_shift, summarize_income};
use crate::error::EngineResult;
use crate::models::{ShiftCalculation, ShiftRecord};

use super::request::{CalculationRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/summary", post(summary_handler))
        .route("/jobs", get(jobs_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Calculates a single shift against an inline job, a configured job, or the
/// active job.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_calculation(&state, &request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                date = %request.date,
                is_shabbat = result.is_shabbat,
                total_earnings = %result.total_earnings.normalize(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /summary endpoint.
///
/// Calculates every shift in the request and totals those inside the period.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if request.period.end_date < request.period.start_date {
        warn!(correlation_id = %correlation_id, "Summary period ends before it starts");
        return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
            "period.end_date must not be before period.start_date",
        )));
    }

    match perform_summary(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                shifts_count = response.records.len(),
                shifts_worked = response.summary.shifts_worked,
                total_earnings = %response.summary.total_earnings.normalize(),
                "Summary completed successfully"
            );
            json_response(StatusCode::OK, &response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Summary failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /jobs endpoint.
async fn jobs_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().jobs())
}

fn perform_calculation(
    state: &AppState,
    request: &CalculationRequest,
) -> EngineResult<ShiftCalculation> {
    let shift = request.shift()?;
    let policy = state.config().transport_policy();

    let job = match &request.job {
        Some(job) => {
            job.validate()?;
            job
        }
        None => state.resolve_job(request.job_id.as_deref())?,
    };

    Ok(calculate_shift_earnings(&shift, job, policy))
}

fn perform_summary(state: &AppState, request: &SummaryRequest) -> EngineResult<SummaryResponse> {
    let policy = state.config().transport_policy();

    let records = request
        .shifts
        .iter()
        .map(|entry| {
            let shift = entry.shift()?;
            let job = state.resolve_job(entry.job_id.as_deref())?;
            Ok(record_shift(job, &shift, policy))
        })
        .collect::<EngineResult<Vec<ShiftRecord>>>()?;

    let summary = summarize_income(&records, &request.period);

    Ok(SummaryResponse { summary, records })
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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

    error_response(ApiErrorResponse::bad_request(error))
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
