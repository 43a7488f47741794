//! Authorization cap decision functionality.
//!
//! A computed pay above the cap is rejected unless the calculation carried
//! an authorization override. The rejection is a normal business outcome,
//! not an error: the scalar engine contract reports it as the sentinel
//! value `-1`, and the itemized result reports it as
//! [`PayDecision::RejectedCapExceeded`]. Callers of the scalar entry point
//! must check for the sentinel explicitly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CapRule;
use crate::models::{AuditStep, PayDecision};

/// The sentinel value returned in place of a pay amount when the computed
/// pay exceeds the authorization cap without an override.
pub const REJECTED_PAY_SENTINEL: Decimal = Decimal::from_parts(1, 0, 0, true, 0);

/// The result of the authorization cap decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationCapResult {
    /// Whether the pay is approved or rejected.
    pub decision: PayDecision,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Applies the authorization cap to a computed gross pay.
///
/// The cap check is a strict greater-than: a pay exactly equal to the cap
/// is always approved. Pay above the cap is approved only when
/// `is_authorized_override` is true.
///
/// # Arguments
///
/// * `gross_pay` - The computed gross pay (base pay lines plus bonuses)
/// * `is_authorized_override` - Whether a payout above the cap was authorized
/// * `rule` - The cap rule
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_authorization_cap;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::PayDecision;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/payroll").unwrap();
///
/// let over_cap = Decimal::from_str("43500").unwrap();
/// let rejected = apply_authorization_cap(over_cap, false, config.cap(), 1);
/// assert_eq!(rejected.decision, PayDecision::RejectedCapExceeded);
///
/// let authorized = apply_authorization_cap(over_cap, true, config.cap(), 1);
/// assert_eq!(authorized.decision, PayDecision::Approved);
/// ```
pub fn apply_authorization_cap(
    gross_pay: Decimal,
    is_authorized_override: bool,
    rule: &CapRule,
    step_number: u32,
) -> AuthorizationCapResult {
    let over_cap = gross_pay > rule.amount;
    let decision = if over_cap && !is_authorized_override {
        PayDecision::RejectedCapExceeded
    } else {
        PayDecision::Approved
    };

    let reasoning = match decision {
        PayDecision::Approved if over_cap => format!(
            "Pay of ${} exceeds the ${} cap but an authorization override was provided",
            gross_pay.normalize(),
            rule.amount.normalize()
        ),
        PayDecision::Approved => format!(
            "Pay of ${} is within the ${} cap",
            gross_pay.normalize(),
            rule.amount.normalize()
        ),
        PayDecision::RejectedCapExceeded => format!(
            "Pay of ${} exceeds the ${} cap without authorization: rejected",
            gross_pay.normalize(),
            rule.amount.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "authorization_cap".to_string(),
        rule_name: "Authorization Cap".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "cap": rule.amount.normalize().to_string(),
            "is_authorized_override": is_authorized_override
        }),
        output: serde_json::json!({
            "decision": match decision {
                PayDecision::Approved => "approved",
                PayDecision::RejectedCapExceeded => "rejected_cap_exceeded",
            }
        }),
        reasoning,
    };

    AuthorizationCapResult {
        decision,
        audit_step,
    }
}
