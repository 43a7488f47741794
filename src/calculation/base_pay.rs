//! Base pay calculation functionality.
//!
//! This module computes the hourly pay lines for a week of work according
//! to the employee's classification:
//!
//! - **Full-time:** hours up to the weekly threshold at the flat rate, and
//!   hours above it at the overtime multiplier.
//! - **Part-time:** every hour at the flat rate. The overtime multiplier
//!   never applies to part-time workers, even beyond the threshold. This is
//!   a deliberate, explicit rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::OvertimeRule;
use crate::models::{AuditStep, Classification, Employee, PayCategory, PayLine};

use super::overtime::split_weekly_hours;

/// The result of the base pay calculation.
///
/// Contains the hourly pay lines (ordinary, and overtime where applicable)
/// and the audit steps documenting the calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePayResult {
    /// Pay lines for hourly pay (0, 1, or 2 lines depending on hours and
    /// classification).
    pub pay_lines: Vec<PayLine>,
    /// Audit steps recording each calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the hourly pay lines for a week of work.
///
/// For full-time employees, the weekly hours are split at the overtime
/// threshold and the excess is paid at the overtime multiplier. For
/// part-time employees, all hours are paid at the flat hourly rate with no
/// overtime multiplier at any hours value.
///
/// # Arguments
///
/// * `employee` - The employee being paid
/// * `hours_worked` - The total hours worked in the week (must be >= 0;
///   validated by the caller)
/// * `rule` - The overtime rule (threshold and multiplier)
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Returns
///
/// A [`BasePayResult`] containing pay lines and audit steps. Zero-hour
/// categories produce no pay line.
///
/// # Examples
///
/// ## Full-time week over the threshold
///
/// ```
/// use payroll_engine::calculation::calculate_base_pay;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{Classification, Employee, PayCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/payroll").unwrap();
/// let employee =
///     Employee::new("Ana", Decimal::from_str("400").unwrap(), Classification::FullTime).unwrap();
///
/// let result = calculate_base_pay(&employee, Decimal::from_str("45").unwrap(), config.overtime(), 1);
///
/// assert_eq!(result.pay_lines.len(), 2);
/// assert_eq!(result.pay_lines[0].category, PayCategory::Ordinary);
/// assert_eq!(result.pay_lines[1].category, PayCategory::Overtime);
/// ```
///
/// ## Part-time week over the threshold (no overtime)
///
/// ```
/// use payroll_engine::calculation::calculate_base_pay;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{Classification, Employee, PayCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/payroll").unwrap();
/// let employee =
///     Employee::new("Luis", Decimal::from_str("400").unwrap(), Classification::PartTime).unwrap();
///
/// let result = calculate_base_pay(&employee, Decimal::from_str("45").unwrap(), config.overtime(), 1);
///
/// assert_eq!(result.pay_lines.len(), 1);
/// assert_eq!(result.pay_lines[0].category, PayCategory::Ordinary);
/// assert_eq!(result.pay_lines[0].amount, Decimal::from_str("18000").unwrap());
/// ```
pub fn calculate_base_pay(
    employee: &Employee,
    hours_worked: Decimal,
    rule: &OvertimeRule,
    step_number_start: u32,
) -> BasePayResult {
    let mut pay_lines = Vec::new();
    let mut audit_steps = Vec::new();
    let mut step_number = step_number_start;

    let rate = employee.hourly_rate();

    match employee.classification() {
        Classification::FullTime => {
            let split = split_weekly_hours(hours_worked, rule.weekly_threshold_hours, step_number);
            audit_steps.push(split.audit_step.clone());
            step_number += 1;

            if split.ordinary_hours > Decimal::ZERO {
                let amount = split.ordinary_hours * rate;
                pay_lines.push(PayLine {
                    category: PayCategory::Ordinary,
                    hours: split.ordinary_hours,
                    rate,
                    amount,
                });
                audit_steps.push(AuditStep {
                    step_number,
                    rule_id: "ordinary_pay".to_string(),
                    rule_name: "Ordinary Pay".to_string(),
                    input: serde_json::json!({
                        "hours": split.ordinary_hours.normalize().to_string(),
                        "rate": rate.normalize().to_string(),
                        "classification": "full_time"
                    }),
                    output: serde_json::json!({
                        "amount": amount.normalize().to_string()
                    }),
                    reasoning: format!(
                        "Ordinary pay: {} hours × ${} = ${}",
                        split.ordinary_hours.normalize(),
                        rate.normalize(),
                        amount.normalize()
                    ),
                });
                step_number += 1;
            }

            if split.overtime_hours > Decimal::ZERO {
                let overtime_rate = rate * rule.multiplier;
                let amount = split.overtime_hours * overtime_rate;
                pay_lines.push(PayLine {
                    category: PayCategory::Overtime,
                    hours: split.overtime_hours,
                    rate: overtime_rate,
                    amount,
                });
                audit_steps.push(AuditStep {
                    step_number,
                    rule_id: "overtime_pay".to_string(),
                    rule_name: "Overtime Pay".to_string(),
                    input: serde_json::json!({
                        "hours": split.overtime_hours.normalize().to_string(),
                        "base_rate": rate.normalize().to_string(),
                        "multiplier": rule.multiplier.normalize().to_string()
                    }),
                    output: serde_json::json!({
                        "rate": overtime_rate.normalize().to_string(),
                        "amount": amount.normalize().to_string()
                    }),
                    reasoning: format!(
                        "Overtime beyond {} hours at {}%: {} hours × ${} = ${}",
                        rule.weekly_threshold_hours.normalize(),
                        (rule.multiplier * Decimal::from(100)).normalize(),
                        split.overtime_hours.normalize(),
                        overtime_rate.normalize(),
                        amount.normalize()
                    ),
                });
            }
        }
        Classification::PartTime => {
            if hours_worked > Decimal::ZERO {
                let amount = hours_worked * rate;
                pay_lines.push(PayLine {
                    category: PayCategory::Ordinary,
                    hours: hours_worked,
                    rate,
                    amount,
                });
            }
            // Part-time never accrues overtime, whatever the hours.
            audit_steps.push(AuditStep {
                step_number,
                rule_id: "part_time_flat_pay".to_string(),
                rule_name: "Part-Time Flat Pay".to_string(),
                input: serde_json::json!({
                    "hours": hours_worked.normalize().to_string(),
                    "rate": rate.normalize().to_string(),
                    "classification": "part_time"
                }),
                output: serde_json::json!({
                    "amount": (hours_worked * rate).normalize().to_string()
                }),
                reasoning: format!(
                    "Part-time pay at the flat rate, no overtime multiplier: {} hours × ${} = ${}",
                    hours_worked.normalize(),
                    rate.normalize(),
                    (hours_worked * rate).normalize()
                ),
            });
        }
    }

    BasePayResult {
        pay_lines,
        audit_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn overtime_rule() -> OvertimeRule {
        ConfigLoader::load("./config/payroll")
            .unwrap()
            .overtime()
            .clone()
    }

    fn employee(rate: &str, classification: Classification) -> Employee {
        Employee::new("Juan", dec(rate), classification).unwrap()
    }

    // ==========================================================================
    // BP-001: full-time 35h - ordinary pay only
    // ==========================================================================
    #[test]
    fn test_bp_001_fulltime_35h_ordinary_only() {
        let rule = overtime_rule();
        let result = calculate_base_pay(
            &employee("500", Classification::FullTime),
            dec("35"),
            &rule,
            1,
        );

        assert_eq!(result.pay_lines.len(), 1);
        let ordinary = &result.pay_lines[0];
        assert_eq!(ordinary.category, PayCategory::Ordinary);
        assert_eq!(ordinary.hours, dec("35"));
        assert_eq!(ordinary.rate, dec("500"));
        assert_eq!(ordinary.amount, dec("17500"));
    }

    // ==========================================================================
    // BP-002: full-time 45h - 40h ordinary + 5h overtime at 150%
    // ==========================================================================
    #[test]
    fn test_bp_002_fulltime_45h_with_overtime() {
        let rule = overtime_rule();
        let result = calculate_base_pay(
            &employee("400", Classification::FullTime),
            dec("45"),
            &rule,
            1,
        );

        assert_eq!(result.pay_lines.len(), 2);

        let ordinary = &result.pay_lines[0];
        assert_eq!(ordinary.category, PayCategory::Ordinary);
        assert_eq!(ordinary.hours, dec("40"));
        assert_eq!(ordinary.amount, dec("16000"));

        let overtime = &result.pay_lines[1];
        assert_eq!(overtime.category, PayCategory::Overtime);
        assert_eq!(overtime.hours, dec("5"));
        // 400 × 1.5 = 600
        assert_eq!(overtime.rate, dec("600"));
        assert_eq!(overtime.amount, dec("3000"));
    }

    // ==========================================================================
    // BP-003: full-time exactly 40h - no overtime line
    // ==========================================================================
    #[test]
    fn test_bp_003_fulltime_exactly_40h_no_overtime() {
        let rule = overtime_rule();
        let result = calculate_base_pay(
            &employee("400", Classification::FullTime),
            dec("40"),
            &rule,
            1,
        );

        assert_eq!(result.pay_lines.len(), 1);
        assert_eq!(result.pay_lines[0].category, PayCategory::Ordinary);
        assert_eq!(result.pay_lines[0].amount, dec("16000"));
    }

    // ==========================================================================
    // BP-004: full-time just over 40h - overtime on excess portion only
    // ==========================================================================
    #[test]
    fn test_bp_004_fulltime_just_over_40h() {
        let rule = overtime_rule();
        let result = calculate_base_pay(
            &employee("400", Classification::FullTime),
            dec("40.0001"),
            &rule,
            1,
        );

        assert_eq!(result.pay_lines.len(), 2);
        assert_eq!(result.pay_lines[0].hours, dec("40"));
        assert_eq!(result.pay_lines[1].hours, dec("0.0001"));
        assert_eq!(result.pay_lines[1].rate, dec("600"));
    }

    // ==========================================================================
    // BP-005: part-time 45h - flat rate for all hours, no overtime
    // ==========================================================================
    #[test]
    fn test_bp_005_parttime_45h_no_overtime() {
        let rule = overtime_rule();
        let result = calculate_base_pay(
            &employee("400", Classification::PartTime),
            dec("45"),
            &rule,
            1,
        );

        assert_eq!(result.pay_lines.len(), 1);
        let ordinary = &result.pay_lines[0];
        assert_eq!(ordinary.category, PayCategory::Ordinary);
        assert_eq!(ordinary.hours, dec("45"));
        assert_eq!(ordinary.rate, dec("400"));
        assert_eq!(ordinary.amount, dec("18000"));
    }

    // ==========================================================================
    // BP-006: part-time scales linearly with hours
    // ==========================================================================
    #[test]
    fn test_bp_006_parttime_linear_scaling() {
        let rule = overtime_rule();
        for hours in ["10", "20", "40", "60", "80"] {
            let result = calculate_base_pay(
                &employee("300", Classification::PartTime),
                dec(hours),
                &rule,
                1,
            );
            assert_eq!(result.pay_lines.len(), 1);
            assert_eq!(result.pay_lines[0].amount, dec(hours) * dec("300"));
        }
    }

    #[test]
    fn test_zero_hours_produces_no_pay_lines() {
        let rule = overtime_rule();

        let ft = calculate_base_pay(
            &employee("400", Classification::FullTime),
            Decimal::ZERO,
            &rule,
            1,
        );
        assert!(ft.pay_lines.is_empty());

        let pt = calculate_base_pay(
            &employee("400", Classification::PartTime),
            Decimal::ZERO,
            &rule,
            1,
        );
        assert!(pt.pay_lines.is_empty());
    }

    #[test]
    fn test_audit_step_numbers_sequential_for_fulltime_overtime() {
        let rule = overtime_rule();
        let result = calculate_base_pay(
            &employee("400", Classification::FullTime),
            dec("45"),
            &rule,
            5,
        );

        // Split, ordinary, overtime.
        assert_eq!(result.audit_steps.len(), 3);
        assert_eq!(result.audit_steps[0].step_number, 5);
        assert_eq!(result.audit_steps[1].step_number, 6);
        assert_eq!(result.audit_steps[2].step_number, 7);
    }

    #[test]
    fn test_parttime_audit_mentions_no_overtime() {
        let rule = overtime_rule();
        let result = calculate_base_pay(
            &employee("400", Classification::PartTime),
            dec("45"),
            &rule,
            1,
        );

        assert_eq!(result.audit_steps.len(), 1);
        assert_eq!(result.audit_steps[0].rule_id, "part_time_flat_pay");
        assert!(result.audit_steps[0].reasoning.contains("no overtime"));
    }

    #[test]
    fn test_fractional_hours() {
        let rule = overtime_rule();
        let result = calculate_base_pay(
            &employee("400", Classification::FullTime),
            dec("42.5"),
            &rule,
            1,
        );

        assert_eq!(result.pay_lines.len(), 2);
        assert_eq!(result.pay_lines[1].hours, dec("2.5"));
        // 2.5 × 600 = 1500
        assert_eq!(result.pay_lines[1].amount, dec("1500"));
    }
}
