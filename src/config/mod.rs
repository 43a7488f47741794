//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load payroll policy from YAML
//! files, including policy metadata, the overtime rule, the punctuality
//! bonus rule, and the authorization cap.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BonusRule, CapRule, OvertimeRule, PayrollPolicy, PolicyMetadata};
