//! Punctuality bonus calculation functionality.
//!
//! A flat bonus is added when weekly hours strictly exceed the bonus
//! threshold. The threshold (38 hours by default) is deliberately lower
//! than the overtime threshold (40 hours); the two rules are independent
//! and are both evaluated against the same hours-worked value, so a week
//! can earn both overtime and the bonus.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BonusRule;
use crate::models::{AuditStep, BonusPayment};

/// The result of the punctuality bonus calculation.
///
/// Contains the bonus payment if the threshold was exceeded, and the audit
/// step documenting the decision either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctualityBonusResult {
    /// The bonus payment, if the hours exceeded the threshold.
    pub bonus: Option<BonusPayment>,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Calculates the punctuality bonus for a week of work.
///
/// The bonus applies when `hours_worked` is strictly greater than the
/// threshold: exactly threshold hours earn no bonus.
///
/// # Arguments
///
/// * `hours_worked` - The total hours worked in the week
/// * `rule` - The bonus rule (threshold and flat amount)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ## Hours above the threshold
///
/// ```
/// use payroll_engine::calculation::calculate_punctuality_bonus;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/payroll").unwrap();
/// let result = calculate_punctuality_bonus(Decimal::from_str("39").unwrap(), config.bonus(), 1);
///
/// let bonus = result.bonus.unwrap();
/// assert_eq!(bonus.amount, Decimal::from(500));
/// ```
///
/// ## Hours exactly at the threshold (no bonus)
///
/// ```
/// use payroll_engine::calculation::calculate_punctuality_bonus;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/payroll").unwrap();
/// let result = calculate_punctuality_bonus(Decimal::from_str("38").unwrap(), config.bonus(), 1);
///
/// assert!(result.bonus.is_none());
/// ```
pub fn calculate_punctuality_bonus(
    hours_worked: Decimal,
    rule: &BonusRule,
    step_number: u32,
) -> PunctualityBonusResult {
    let earned = hours_worked > rule.weekly_threshold_hours;

    let bonus = if earned {
        Some(BonusPayment {
            bonus_type: "punctuality".to_string(),
            description: format!(
                "Punctuality bonus for working more than {} hours",
                rule.weekly_threshold_hours.normalize()
            ),
            amount: rule.amount,
        })
    } else {
        None
    };

    let reasoning = if earned {
        format!(
            "{} hours worked exceeds the {} hour bonus threshold: flat ${} bonus added",
            hours_worked.normalize(),
            rule.weekly_threshold_hours.normalize(),
            rule.amount.normalize()
        )
    } else {
        format!(
            "{} hours worked does not exceed the {} hour bonus threshold: no bonus",
            hours_worked.normalize(),
            rule.weekly_threshold_hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "punctuality_bonus".to_string(),
        rule_name: "Punctuality Bonus".to_string(),
        input: serde_json::json!({
            "hours_worked": hours_worked.normalize().to_string(),
            "threshold": rule.weekly_threshold_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "earned": earned,
            "amount": if earned {
                rule.amount.normalize().to_string()
            } else {
                "0".to_string()
            }
        }),
        reasoning,
    };

    PunctualityBonusResult { bonus, audit_step }
}
