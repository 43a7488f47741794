//! Employee model and related types.
//!
//! This module defines the Employee struct and Classification enum for
//! representing workers in the payroll calculation system. An `Employee`
//! can only be built through [`Employee::new`], so an invalid employee
//! (empty name, negative rate) cannot exist.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the employment classification of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Full-time employment. Eligible for overtime above the weekly threshold.
    FullTime,
    /// Part-time employment. Never receives the overtime multiplier,
    /// regardless of hours worked.
    PartTime,
}

/// Represents an employee subject to payroll calculation.
///
/// Immutable value type. Construct with [`Employee::new`], which validates
/// the fields and fails with [`EngineError::InvalidEmployee`] otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    name: String,
    hourly_rate: Decimal,
    classification: Classification,
}

impl Employee {
    /// Creates a new employee, validating its fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the name is empty (after
    /// trimming) or the hourly rate is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Classification, Employee};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Juan", Decimal::from(500), Classification::FullTime).unwrap();
    /// assert_eq!(employee.name(), "Juan");
    ///
    /// let invalid = Employee::new("", Decimal::from(500), Classification::FullTime);
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        hourly_rate: Decimal,
        classification: Classification,
    ) -> EngineResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if hourly_rate < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: format!("cannot be negative: {}", hourly_rate),
            });
        }
        Ok(Self {
            name,
            hourly_rate,
            classification,
        })
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the employee's classification.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Returns true if the employee is full-time.
    pub fn is_full_time(&self) -> bool {
        self.classification == Classification::FullTime
    }
}
