//! Pro-rated earnings calculation.
//!
//! This module converts fixed monthly pay components into amounts earned
//! for a period, pro-rated by paid days over the fixed period base.

use rust_decimal::Decimal;

use crate::config::CalculationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CompensationProfile};

/// The result of the earnings calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct EarningsResult {
    /// Basic salary earned for the period.
    pub basic_earned: Decimal,
    /// House rent allowance earned for the period.
    pub hra_earned: Decimal,
    /// Other allowance earned for the period.
    pub other_earned: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates pro-rated earnings for a period.
///
/// Basic salary and HRA are always pro-rated as `amount / base * paid_days`
/// where `base` is the fixed pro-ration denominator from policy. The other
/// allowance is pro-rated the same way when `prorate_other_allowance` is
/// set, and paid flat otherwise.
///
/// # Arguments
///
/// * `profile` - The employee's fixed compensation components
/// * `paid_days` - Days counted toward pay (present + weekly off + paid leave)
/// * `policy` - The calculation policy supplying the pro-ration base
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when any compensation component is
/// negative or `paid_days` exceeds the pro-ration base. Invalid inputs are
/// rejected, never clamped.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_earnings;
/// use wage_engine::config::CalculationPolicy;
/// use wage_engine::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     basic_salary: Decimal::from(13500),
///     hra_amount: Decimal::from(7500),
///     other_allowance: Decimal::ZERO,
/// };
/// let result = calculate_earnings(&profile, 27, &CalculationPolicy::default(), 1).unwrap();
/// assert_eq!(result.basic_earned, Decimal::from(12150));
/// assert_eq!(result.hra_earned, Decimal::from(6750));
/// ```
pub fn calculate_earnings(
    profile: &CompensationProfile,
    paid_days: u32,
    policy: &CalculationPolicy,
    step_number: u32,
) -> EngineResult<EarningsResult> {
    for (field, amount) in [
        ("basic_salary", profile.basic_salary),
        ("hra_amount", profile.hra_amount),
        ("other_allowance", profile.other_allowance),
    ] {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not be negative, got {}", amount),
            });
        }
    }

    if paid_days > policy.days_in_period_base {
        return Err(EngineError::InvalidInput {
            field: "paid_days".to_string(),
            message: format!(
                "{} exceeds the {}-day period base",
                paid_days, policy.days_in_period_base
            ),
        });
    }

    let base = Decimal::from(policy.days_in_period_base);
    let days = Decimal::from(paid_days);

    let basic_earned = profile.basic_salary / base * days;
    let hra_earned = profile.hra_amount / base * days;
    let other_earned = if policy.prorate_other_allowance {
        profile.other_allowance / base * days
    } else {
        profile.other_allowance
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "prorated_earnings".to_string(),
        rule_name: "Pro-Rated Earnings".to_string(),
        input: serde_json::json!({
            "basic_salary": profile.basic_salary.to_string(),
            "hra_amount": profile.hra_amount.to_string(),
            "other_allowance": profile.other_allowance.to_string(),
            "paid_days": paid_days,
            "days_in_period_base": policy.days_in_period_base,
            "prorate_other_allowance": policy.prorate_other_allowance
        }),
        output: serde_json::json!({
            "basic_earned": basic_earned.to_string(),
            "hra_earned": hra_earned.to_string(),
            "other_earned": other_earned.to_string()
        }),
        reasoning: format!(
            "Pro-rated fixed pay for {} of {} paid days; other allowance {}",
            paid_days,
            policy.days_in_period_base,
            if policy.prorate_other_allowance {
                "pro-rated"
            } else {
                "paid flat"
            }
        ),
    };

    Ok(EarningsResult {
        basic_earned,
        hra_earned,
        other_earned,
        audit_step,
    })
}
