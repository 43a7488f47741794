//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains all the calculation functions for determining
//! weekly pay, including the ordinary/overtime hours split, base pay per
//! classification, the punctuality bonus, the authorization cap decision,
//! and the top-level weekly pay computation.

mod authorization_cap;
mod base_pay;
mod overtime;
mod punctuality_bonus;
mod weekly_pay;

pub use authorization_cap::{
    AuthorizationCapResult, REJECTED_PAY_SENTINEL, apply_authorization_cap,
};
pub use base_pay::{BasePayResult, calculate_base_pay};
pub use overtime::{DEFAULT_WEEKLY_OVERTIME_THRESHOLD, WeeklyHoursSplit, split_weekly_hours};
pub use punctuality_bonus::{PunctualityBonusResult, calculate_punctuality_bonus};
pub use weekly_pay::{WeeklyPayResult, compute_weekly_pay, compute_weekly_pay_amount};
