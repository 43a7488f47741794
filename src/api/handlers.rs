//! HTTP request handlers for the Payroll Calculation Engine API.
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

use crate::calculation::compute_weekly_pay;
use crate::models::{AuditTrace, CalculationResult, Employee};

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
/// Accepts a calculation request and returns the calculated weekly pay. A
/// pay rejected by the authorization cap is still a 200: the rejection is a
/// business outcome carried in the result's decision and sentinel payable
/// amount.
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

    // Convert the employee payload into the validated domain type
    let employee: Employee = match request.employee.try_into() {
        Ok(employee) => employee,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid employee");
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Perform the calculation
    let start_time = Instant::now();
    let policy = state.config().policy();
    match compute_weekly_pay(
        &employee,
        request.hours_worked,
        request.authorized_override,
        policy,
    ) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_name = %employee.name(),
                gross_pay = %result.totals.gross_pay,
                decision = ?result.decision,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            let payable_amount = result.payable_amount();
            let response = CalculationResult {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_name: employee.name().to_string(),
                classification: employee.classification(),
                hours_worked: request.hours_worked,
                week_ending: request.week_ending,
                pay_lines: result.pay_lines,
                bonuses: result.bonuses,
                totals: result.totals,
                decision: result.decision,
                payable_amount,
                audit_trace: AuditTrace {
                    steps: result.audit_steps,
                    duration_us: duration.as_micros() as u64,
                },
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::EmployeeRequest;
    use crate::config::ConfigLoader;
    use crate::models::{Classification, PayDecision};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            employee: EmployeeRequest {
                name: "Juan".to_string(),
                hourly_rate: dec("500"),
                classification: Classification::FullTime,
            },
            hours_worked: dec("35"),
            authorized_override: true,
            week_ending: None,
        }
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let request = create_valid_request();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        // Verify response body is a valid CalculationResult
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.employee_name, "Juan");
        assert_eq!(result.totals.gross_pay, dec("17500"));
        assert_eq!(result.decision, PayDecision::Approved);
        assert_eq!(result.payable_amount, dec("17500"));
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_employee_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        // JSON with no employee field
        let body = r#"{
            "hours_worked": "10",
            "authorized_override": false
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("employee"),
            "Expected error message to mention the missing employee field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_negative_hours_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let mut request = create_valid_request();
        request.hours_worked = dec("-5");
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "NEGATIVE_HOURS");
    }

    #[tokio::test]
    async fn test_api_005_empty_employee_name_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let mut request = create_valid_request();
        request.employee.name = "".to_string();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "INVALID_EMPLOYEE");
    }

    #[tokio::test]
    async fn test_api_006_cap_rejection_is_200_with_sentinel() {
        let state = create_test_state();
        let router = create_router(state);

        let request = CalculationRequest {
            employee: EmployeeRequest {
                name: "Maria".to_string(),
                hourly_rate: dec("1000"),
                classification: Classification::FullTime,
            },
            hours_worked: dec("45"),
            authorized_override: false,
            week_ending: None,
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.decision, PayDecision::RejectedCapExceeded);
        assert_eq!(result.payable_amount, dec("-1"));
        // The itemized gross pay is still reported.
        assert_eq!(result.totals.gross_pay, dec("48000"));
    }
}
