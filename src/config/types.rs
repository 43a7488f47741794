//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Monetary values and
//! hour thresholds are written as strings in the YAML so they deserialize
//! into exact `Decimal` values.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the payroll policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// A short identifying code for the policy (e.g., "WEEKLY-STD").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// The overtime rule.
///
/// Weekly hours above the threshold are paid at `multiplier` times the
/// hourly rate. The rule applies to full-time employees only; part-time
/// employees are paid the flat rate for every hour worked.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeRule {
    /// Weekly hours above this threshold are overtime.
    pub weekly_threshold_hours: Decimal,
    /// The rate multiplier for overtime hours (e.g., 1.5).
    pub multiplier: Decimal,
}

/// The punctuality bonus rule.
///
/// A flat amount is added when weekly hours strictly exceed the threshold.
/// The bonus threshold is independent of the overtime threshold; both rules
/// are evaluated against the same hours-worked value and can apply together.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusRule {
    /// The bonus applies when weekly hours strictly exceed this threshold.
    pub weekly_threshold_hours: Decimal,
    /// The flat bonus amount.
    pub amount: Decimal,
}

/// The authorization cap rule.
///
/// A computed pay above the cap is rejected unless the calculation was
/// submitted with the authorization override flag.
#[derive(Debug, Clone, Deserialize)]
pub struct CapRule {
    /// Pay above this amount requires an authorization override.
    pub amount: Decimal,
}

/// The complete payroll policy loaded from YAML configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollPolicy {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// The overtime rule.
    pub overtime: OvertimeRule,
    /// The punctuality bonus rule.
    pub punctuality_bonus: BonusRule,
    /// The authorization cap rule.
    pub authorization_cap: CapRule,
}
