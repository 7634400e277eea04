//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;
use crate::models::{ContributorClassification, PayrollResult};

use super::request::CalculateRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .route("/rates/:company_id/:contributor_type", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /payroll/calculate.
///
/// Resolves rates for the requested contributor type, runs the calculator
/// and returns the payroll result with monetary values rounded to two
/// decimal places (presentation rounding).
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
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
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
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

    let company_id = request.company_id.clone().unwrap_or_default();
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let rates = match state
        .resolver()
        .resolve(&company_id, request.contributor_type, as_of)
    {
        Ok(rates) => rates,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rate resolution failed");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    match calculate(&request.components, &rates) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                contributor_type = %request.contributor_type,
                gross_salary = %breakdown.gross_salary,
                net_salary = %breakdown.net_salary,
                "Calculation completed successfully"
            );
            let result = PayrollResult {
                calculation_id: correlation_id,
                calculated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id: request.employee_id.unwrap_or_default(),
                company_id,
                contributor_type: request.contributor_type,
                gross_salary: breakdown.gross_salary,
                gosi_wage_base: breakdown.gosi_wage_base,
                gosi_employee: breakdown.gosi_employee,
                gosi_employer: breakdown.gosi_employer,
                net_salary: breakdown.net_salary,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result.rounded()),
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
            api_error.into_response()
        }
    }
}

/// Query parameters for the rates endpoint.
#[derive(Debug, Deserialize)]
struct RatesQuery {
    /// The date to resolve rates as of; defaults to today.
    date: Option<NaiveDate>,
}

/// Handler for GET /rates/:company_id/:contributor_type.
///
/// Returns the resolved rate set without running a calculation.
async fn rates_handler(
    State(state): State<AppState>,
    Path((company_id, contributor_type)): Path<(String, String)>,
    Query(query): Query<RatesQuery>,
) -> impl IntoResponse {
    let Some(classification) = ContributorClassification::parse(&contributor_type) else {
        let error = ApiError::validation_error(format!(
            "Unknown contributor type: {}",
            contributor_type
        ));
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(error),
        )
            .into_response();
    };

    let as_of = query.date.unwrap_or_else(|| Utc::now().date_naive());
    match state.resolver().resolve(&company_id, classification, as_of) {
        Ok(rates) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(rates),
        )
            .into_response(),
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
