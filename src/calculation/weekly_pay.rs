//! Top-level weekly pay computation.
//!
//! This module orchestrates the individual pay rules into a single
//! calculation: the ordinary/overtime base pay, the punctuality bonus, and
//! the authorization cap decision. It offers two entry points:
//!
//! - [`compute_weekly_pay`]: the full itemized result, with pay lines,
//!   bonuses, totals, decision, and audit steps.
//! - [`compute_weekly_pay_amount`]: the scalar contract, returning the pay
//!   amount or the `-1` sentinel when the pay exceeds the cap without an
//!   authorization override.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, BonusPayment, Employee, PayCategory, PayDecision, PayLine, PayTotals};

use super::authorization_cap::{REJECTED_PAY_SENTINEL, apply_authorization_cap};
use super::base_pay::calculate_base_pay;
use super::punctuality_bonus::calculate_punctuality_bonus;

/// The complete itemized result of a weekly pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPayResult {
    /// Itemized hourly pay lines.
    pub pay_lines: Vec<PayLine>,
    /// Flat bonus payments.
    pub bonuses: Vec<BonusPayment>,
    /// Aggregated totals.
    pub totals: PayTotals,
    /// The authorization decision.
    pub decision: PayDecision,
    /// The ordered audit steps for every rule applied.
    pub audit_steps: Vec<AuditStep>,
}

impl WeeklyPayResult {
    /// Returns the payable amount under the scalar engine contract: the
    /// gross pay when approved, or the `-1` sentinel when the pay exceeded
    /// the authorization cap without an override.
    pub fn payable_amount(&self) -> Decimal {
        match self.decision {
            PayDecision::Approved => self.totals.gross_pay,
            PayDecision::RejectedCapExceeded => REJECTED_PAY_SENTINEL,
        }
    }
}

/// Computes the weekly pay for an employee.
///
/// The rules are applied in order: base pay (with the overtime split for
/// full-time employees), then the punctuality bonus, then the authorization
/// cap decision over the resulting gross pay. The computation is
/// deterministic and side-effect-free.
///
/// # Arguments
///
/// * `employee` - The employee being paid
/// * `hours_worked` - The total hours worked in the week (must be >= 0)
/// * `is_authorized_override` - Whether a payout above the cap was authorized
/// * `policy` - The payroll policy carrying the rule parameters
///
/// # Errors
///
/// Returns [`EngineError::NegativeHours`] if `hours_worked` is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_weekly_pay;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{Classification, Employee, PayDecision};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/payroll").unwrap();
/// let employee =
///     Employee::new("Ana", Decimal::from_str("400").unwrap(), Classification::FullTime).unwrap();
///
/// let result =
///     compute_weekly_pay(&employee, Decimal::from_str("45").unwrap(), true, config.policy())
///         .unwrap();
///
/// // 40×400 + 5×400×1.5 + 500 bonus = 19500
/// assert_eq!(result.totals.gross_pay, Decimal::from_str("19500").unwrap());
/// assert_eq!(result.decision, PayDecision::Approved);
/// ```
pub fn compute_weekly_pay(
    employee: &Employee,
    hours_worked: Decimal,
    is_authorized_override: bool,
    policy: &PayrollPolicy,
) -> EngineResult<WeeklyPayResult> {
    if hours_worked < Decimal::ZERO {
        return Err(EngineError::NegativeHours {
            hours: hours_worked,
        });
    }

    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    // Base pay: ordinary hours plus overtime for full-time employees.
    let base_pay = calculate_base_pay(employee, hours_worked, &policy.overtime, step_number);
    step_number += base_pay.audit_steps.len() as u32;
    audit_steps.extend(base_pay.audit_steps);
    let pay_lines = base_pay.pay_lines;

    // Punctuality bonus, evaluated against the same hours-worked value.
    let bonus_result =
        calculate_punctuality_bonus(hours_worked, &policy.punctuality_bonus, step_number);
    audit_steps.push(bonus_result.audit_step);
    step_number += 1;
    let bonuses: Vec<BonusPayment> = bonus_result.bonus.into_iter().collect();

    // Totals.
    let pay_lines_total: Decimal = pay_lines.iter().map(|pl| pl.amount).sum();
    let bonus_total: Decimal = bonuses.iter().map(|b| b.amount).sum();
    let gross_pay = pay_lines_total + bonus_total;

    let ordinary_hours: Decimal = pay_lines
        .iter()
        .filter(|pl| pl.category == PayCategory::Ordinary)
        .map(|pl| pl.hours)
        .sum();
    let overtime_hours: Decimal = pay_lines
        .iter()
        .filter(|pl| pl.category == PayCategory::Overtime)
        .map(|pl| pl.hours)
        .sum();

    // Authorization cap over the final gross pay.
    let cap_result = apply_authorization_cap(
        gross_pay,
        is_authorized_override,
        &policy.authorization_cap,
        step_number,
    );
    audit_steps.push(cap_result.audit_step);

    Ok(WeeklyPayResult {
        pay_lines,
        bonuses,
        totals: PayTotals {
            gross_pay,
            ordinary_hours,
            overtime_hours,
            bonus_total,
        },
        decision: cap_result.decision,
        audit_steps,
    })
}

/// Computes the weekly pay amount under the scalar engine contract.
///
/// Returns the pay amount, or the sentinel `-1` when the computed pay
/// exceeds the authorization cap and `is_authorized_override` is false.
/// The sentinel is a normal return value, not an error; callers must check
/// for it explicitly.
///
/// # Errors
///
/// Returns [`EngineError::NegativeHours`] if `hours_worked` is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_weekly_pay_amount;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{Classification, Employee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/payroll").unwrap();
/// let employee =
///     Employee::new("Maria", Decimal::from_str("1000").unwrap(), Classification::FullTime)
///         .unwrap();
///
/// // 40×1000 + 5×1000×1.5 + 500 = 48000, over the 20000 cap, no override.
/// let amount =
///     compute_weekly_pay_amount(&employee, Decimal::from_str("45").unwrap(), false, config.policy())
///         .unwrap();
/// assert_eq!(amount, Decimal::from_str("-1").unwrap());
/// ```
pub fn compute_weekly_pay_amount(
    employee: &Employee,
    hours_worked: Decimal,
    is_authorized_override: bool,
    policy: &PayrollPolicy,
) -> EngineResult<Decimal> {
    let result = compute_weekly_pay(employee, hours_worked, is_authorized_override, policy)?;
    Ok(result.payable_amount())
}
