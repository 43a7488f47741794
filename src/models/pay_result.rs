//! Pay result models for the Payroll Calculation Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a weekly pay calculation,
//! including pay lines, bonus payments, totals, the authorization decision,
//! and the audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Classification;

/// Represents the category of pay for a pay line.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayCategory;
///
/// let category = PayCategory::Ordinary;
/// assert_eq!(format!("{:?}", category), "Ordinary");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Hours paid at the flat hourly rate.
    Ordinary,
    /// Hours above the weekly threshold, paid at the overtime multiplier.
    /// Only full-time employees accrue overtime.
    Overtime,
}

/// Represents a single line item in a pay calculation.
///
/// Each pay line captures the hours worked in a specific category,
/// the applicable rate, and the resulting amount.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayCategory, PayLine};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay_line = PayLine {
///     category: PayCategory::Ordinary,
///     hours: Decimal::from_str("35").unwrap(),
///     rate: Decimal::from_str("500").unwrap(),
///     amount: Decimal::from_str("17500").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The category of pay (Ordinary or Overtime).
    pub category: PayCategory,
    /// The number of hours paid in this category.
    pub hours: Decimal,
    /// The hourly rate for this category.
    pub rate: Decimal,
    /// The total amount for this pay line (hours * rate).
    pub amount: Decimal,
}

/// Represents a flat bonus payment.
///
/// Bonuses are fixed amounts added on top of hourly pay lines, such as the
/// punctuality bonus for working more than the bonus threshold in a week.
///
/// # Example
///
/// ```
/// use payroll_engine::models::BonusPayment;
/// use rust_decimal::Decimal;
///
/// let bonus = BonusPayment {
///     bonus_type: "punctuality".to_string(),
///     description: "Punctuality bonus for working more than 38 hours".to_string(),
///     amount: Decimal::from(500),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusPayment {
    /// The type of bonus (e.g., "punctuality").
    #[serde(rename = "type")]
    pub bonus_type: String,
    /// A description of the bonus.
    pub description: String,
    /// The flat amount of the bonus.
    pub amount: Decimal,
}

/// Aggregated totals for a pay calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = PayTotals {
///     gross_pay: Decimal::from_str("19500").unwrap(),
///     ordinary_hours: Decimal::from_str("40").unwrap(),
///     overtime_hours: Decimal::from_str("5").unwrap(),
///     bonus_total: Decimal::from_str("500").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// The total gross pay (sum of all pay lines and bonuses).
    pub gross_pay: Decimal,
    /// Total hours paid at the ordinary rate.
    pub ordinary_hours: Decimal,
    /// Total hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Total value of all bonuses.
    pub bonus_total: Decimal,
}

/// The authorization decision for a calculated pay amount.
///
/// A pay amount above the authorization cap is rejected unless the
/// calculation was submitted with the authorization override flag. The
/// rejection is a business outcome, not an error: callers receive a full
/// result with this decision set to [`PayDecision::RejectedCapExceeded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayDecision {
    /// The pay amount is payable.
    Approved,
    /// The pay amount exceeds the authorization cap and no override was
    /// provided. The payable amount is reported as the `-1` sentinel.
    RejectedCapExceeded,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// Records every rule applied during the calculation process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The ordered audit steps.
    pub steps: Vec<AuditStep>,
    /// How long the calculation took, in microseconds.
    pub duration_us: u64,
}

/// The complete result of a weekly pay calculation, as returned by the API.
///
/// The `payable_amount` field preserves the engine's scalar contract: it is
/// the gross pay when the decision is approved, or the `-1` sentinel when
/// the pay exceeded the authorization cap without an override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced this result.
    pub engine_version: String,
    /// The employee's name.
    pub employee_name: String,
    /// The employee's classification.
    pub classification: Classification,
    /// The hours worked in the week.
    pub hours_worked: Decimal,
    /// The week-ending date, when supplied in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_ending: Option<NaiveDate>,
    /// Itemized hourly pay lines.
    pub pay_lines: Vec<PayLine>,
    /// Flat bonus payments.
    pub bonuses: Vec<BonusPayment>,
    /// Aggregated totals.
    pub totals: PayTotals,
    /// The authorization decision.
    pub decision: PayDecision,
    /// Gross pay, or `-1` when the decision is `rejected_cap_exceeded`.
    pub payable_amount: Decimal,
    /// The audit trace for the calculation.
    pub audit_trace: AuditTrace,
}
