//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_result;

pub use employee::{Classification, Employee};
pub use pay_result::{
    AuditStep, AuditTrace, BonusPayment, CalculationResult, PayCategory, PayDecision, PayLine,
    PayTotals,
};
