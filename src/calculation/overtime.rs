//! Weekly overtime detection functionality.
//!
//! This module provides functions for splitting weekly worked hours into
//! ordinary and overtime portions. Hours above the weekly threshold are
//! overtime; whether the overtime multiplier is actually applied depends on
//! the employee's classification and is decided in
//! [`calculate_base_pay`](crate::calculation::calculate_base_pay).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of splitting weekly hours at the overtime threshold.
///
/// Contains the split between ordinary hours and overtime hours,
/// along with the audit step documenting the split.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{DEFAULT_WEEKLY_OVERTIME_THRESHOLD, split_weekly_hours};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_weekly_hours(
///     Decimal::from_str("45").unwrap(),
///     DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
///     1,
/// );
/// assert_eq!(split.ordinary_hours, Decimal::from_str("40").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::from_str("5").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursSplit {
    /// The number of ordinary hours (up to the threshold).
    pub ordinary_hours: Decimal,
    /// The number of overtime hours (hours exceeding the threshold).
    pub overtime_hours: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Default weekly overtime threshold in hours.
pub const DEFAULT_WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Splits weekly worked hours at the overtime threshold.
///
/// Hours up to the threshold are ordinary; any excess is overtime. The
/// threshold check is strict: exactly threshold hours produce no overtime.
///
/// # Arguments
///
/// * `worked_hours` - The total hours worked in the week
/// * `threshold` - The weekly overtime threshold (typically 40 hours)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// A [`WeeklyHoursSplit`] containing:
/// - `ordinary_hours`: Hours up to the threshold (capped at threshold)
/// - `overtime_hours`: Hours exceeding the threshold (can be zero)
/// - `audit_step`: Documentation of the split
///
/// # Examples
///
/// ## Week at threshold (no overtime)
///
/// ```
/// use payroll_engine::calculation::{DEFAULT_WEEKLY_OVERTIME_THRESHOLD, split_weekly_hours};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_weekly_hours(
///     Decimal::from_str("40").unwrap(),
///     DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
///     1,
/// );
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
///
/// ## Short week (under threshold)
///
/// ```
/// use payroll_engine::calculation::{DEFAULT_WEEKLY_OVERTIME_THRESHOLD, split_weekly_hours};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_weekly_hours(
///     Decimal::from_str("35").unwrap(),
///     DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
///     1,
/// );
/// assert_eq!(split.ordinary_hours, Decimal::from_str("35").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_weekly_hours(
    worked_hours: Decimal,
    threshold: Decimal,
    step_number: u32,
) -> WeeklyHoursSplit {
    let ordinary_hours = if worked_hours <= threshold {
        worked_hours
    } else {
        threshold
    };

    let overtime_hours = if worked_hours > threshold {
        worked_hours - threshold
    } else {
        Decimal::ZERO
    };

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds the {} hour weekly threshold: {} ordinary, {} overtime",
            worked_hours.normalize(),
            threshold.normalize(),
            ordinary_hours.normalize(),
            overtime_hours.normalize()
        )
    } else {
        format!(
            "{} hours worked is within the {} hour weekly threshold: no overtime",
            worked_hours.normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_overtime_split".to_string(),
        rule_name: "Weekly Overtime Split".to_string(),
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "ordinary_hours": ordinary_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    WeeklyHoursSplit {
        ordinary_hours,
        overtime_hours,
        audit_step,
    }
}
