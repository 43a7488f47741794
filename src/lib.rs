//! Weekly Payroll Calculation Engine
//!
//! This crate computes weekly pay for an employee from an hourly rate, an
//! employment classification, hours worked, and an authorization flag. Pay
//! rules (overtime threshold and multiplier, punctuality bonus, and the
//! authorization cap) are loaded from YAML policy configuration.
//!
//! A small shopping-cart module is included for cart total calculations.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cart;
pub mod config;
pub mod error;
pub mod models;
