//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::PayrollCalculator;
use crate::compliance::ComplianceValidator;
use crate::models::ComplianceInput;

use super::request::{ComplianceRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .route("/compliance/validate", post(validate_handler))
        .route("/countries", get(countries_handler))
        .with_state(state)
}

/// Summary of a supported country, returned by `GET /countries`.
#[derive(Debug, Clone, Serialize)]
struct CountrySummary {
    code: String,
    name: String,
    currency: String,
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /payroll/calculate endpoint.
///
/// Accepts a payroll request and returns the calculated breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let calculator = match PayrollCalculator::for_country(request.country, state.config()) {
        Ok(calculator) => calculator,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                country = %request.country,
                "No configuration for country"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    match calculator.calculate(request.gross_salary, &request.options()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                country = %result.country,
                gross_salary = %result.gross_salary,
                net_salary = %result.totals.net_salary,
                "Payroll calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /compliance/validate endpoint.
///
/// Evaluates the country's rule catalog against the submitted employee
/// data and returns the scored report.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComplianceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compliance validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let validator = match ComplianceValidator::for_country(request.country, state.config()) {
        Ok(validator) => validator,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                country = %request.country,
                "No configuration for country"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let input: ComplianceInput = request.into();
    let report = validator.validate(&input);

    info!(
        correlation_id = %correlation_id,
        country = %report.country,
        score = report.score,
        is_compliant = report.is_compliant,
        issues = report.issues.len(),
        warnings = report.warnings.len(),
        "Compliance validation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Handler for GET /countries endpoint.
///
/// Lists the countries with loaded configuration.
async fn countries_handler(State(state): State<AppState>) -> impl IntoResponse {
    let countries: Vec<CountrySummary> = state
        .countries()
        .iter()
        .filter_map(|&code| state.config().country(code).ok())
        .map(|config| CountrySummary {
            code: config.country.code.to_string(),
            name: config.country.name.clone(),
            currency: config.country.currency.clone(),
        })
        .collect();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(serde_json::json!({ "countries": countries })),
    )
        .into_response()
}
