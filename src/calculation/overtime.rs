//! Overtime amount calculation.
//!
//! Overtime is paid on the hourly basic rate: the full-month basic salary
//! divided by the pro-ration base and the standard working day, times the
//! configured multiplier.

use rust_decimal::Decimal;

use crate::config::CalculationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the overtime calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct OvertimeResult {
    /// The derived hourly basic rate.
    pub hourly_basic_rate: Decimal,
    /// The overtime amount for the period.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the overtime amount for a period.
///
/// `hourly_basic_rate = basic_salary / days_in_period_base / standard_hours_per_day`
/// and `amount = overtime_hours * hourly_basic_rate * overtime_multiplier`.
/// The multiplier is policy (1.5x and 2x are both observed in practice),
/// never a constant here.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `basic_salary` or
/// `overtime_hours` is negative.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_overtime;
/// use wage_engine::config::CalculationPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 13500 / 30 / 8 = 56.25 per hour; 4h at 2x = 450
/// let result = calculate_overtime(
///     Decimal::from(13500),
///     Decimal::from(4),
///     &CalculationPolicy::default(),
///     2,
/// ).unwrap();
/// assert_eq!(result.hourly_basic_rate, Decimal::from_str("56.25").unwrap());
/// assert_eq!(result.amount, Decimal::from(450));
/// ```
pub fn calculate_overtime(
    basic_salary: Decimal,
    overtime_hours: Decimal,
    policy: &CalculationPolicy,
    step_number: u32,
) -> EngineResult<OvertimeResult> {
    if basic_salary < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "basic_salary".to_string(),
            message: format!("must not be negative, got {}", basic_salary),
        });
    }
    if overtime_hours < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "overtime_hours".to_string(),
            message: format!("must not be negative, got {}", overtime_hours),
        });
    }

    let hourly_basic_rate = basic_salary
        / Decimal::from(policy.days_in_period_base)
        / Decimal::from(policy.standard_hours_per_day);
    let amount = overtime_hours * hourly_basic_rate * policy.overtime_multiplier;

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime".to_string(),
        rule_name: "Overtime".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "standard_hours_per_day": policy.standard_hours_per_day,
            "overtime_multiplier": policy.overtime_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_basic_rate": hourly_basic_rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} overtime hours at {} per hour with {}x multiplier",
            overtime_hours.normalize(),
            hourly_basic_rate.normalize(),
            policy.overtime_multiplier.normalize()
        ),
    };

    Ok(OvertimeResult {
        hourly_basic_rate,
        amount,
        audit_step,
    })
}
