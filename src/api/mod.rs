//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoint for calculating weekly pay
//! under the loaded payroll policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
