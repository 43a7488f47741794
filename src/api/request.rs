//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint. The employee payload converts into the domain
//! [`Employee`] through a validating `TryFrom`, so an invalid employee is
//! rejected before any calculation runs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Classification, Employee};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The total hours worked in the week.
    pub hours_worked: Decimal,
    /// Whether a payout above the authorization cap was authorized.
    #[serde(default)]
    pub authorized_override: bool,
    /// Optional week-ending date, echoed back in the result.
    #[serde(default)]
    pub week_ending: Option<NaiveDate>,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's name.
    pub name: String,
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
    /// The employment classification.
    pub classification: Classification,
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        Employee::new(req.name, req.hourly_rate, req.classification)
    }
}
