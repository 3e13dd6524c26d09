//! The full wage calculation pipeline.
//!
//! Ties the individual calculation steps together: pro-rated earnings,
//! overtime, gross, statutory deductions, advance recovery, and net. All
//! arithmetic stays at full precision; callers round once at the boundary
//! via [`crate::models::PayrollResult::rounded`].

use rust_decimal::Decimal;

use super::{calculate_deductions, calculate_earnings, calculate_overtime};
use crate::config::{CalculationPolicy, DeductionRates};
use crate::error::EngineResult;
use crate::models::{AttendanceTally, AuditStep, CompensationProfile, PayrollResult};

/// The unrounded result of the full pipeline, with its audit steps.
#[derive(Debug, Clone)]
pub struct WageCalculation {
    /// The assembled payroll result at full precision.
    pub result: PayrollResult,
    /// The ordered audit steps from every stage of the pipeline.
    pub audit_steps: Vec<AuditStep>,
}

/// Runs the complete wage calculation for one employee and period.
///
/// The pipeline is:
///
/// 1. Pro-rate fixed pay components by `tally.paid_days()` over the period base
/// 2. Price overtime hours at the hourly basic rate times the multiplier
/// 3. Sum earnings and overtime into gross salary
/// 4. Apply provident fund, ESI, the welfare fund, and advance recovery
/// 5. Net salary is gross minus total deductions
///
/// # Errors
///
/// Propagates [`crate::error::EngineError::InvalidInput`] from any stage
/// that rejects its inputs.
pub fn calculate_wage(
    profile: &CompensationProfile,
    tally: &AttendanceTally,
    rates: &DeductionRates,
    advances_total: Decimal,
    policy: &CalculationPolicy,
) -> EngineResult<WageCalculation> {
    let paid_days = tally.paid_days();

    let earnings = calculate_earnings(profile, paid_days, policy, 1)?;
    let overtime = calculate_overtime(profile.basic_salary, tally.overtime_hours, policy, 2)?;

    let gross_salary =
        earnings.basic_earned + earnings.hra_earned + earnings.other_earned + overtime.amount;

    let deductions = calculate_deductions(
        earnings.basic_earned,
        gross_salary,
        rates,
        advances_total,
        policy,
        3,
    )?;

    let net_salary = gross_salary - deductions.total_deductions;

    let mut audit_steps = vec![earnings.audit_step, overtime.audit_step];
    audit_steps.extend(deductions.audit_steps);

    let result = PayrollResult {
        paid_days,
        basic_earned: earnings.basic_earned,
        hra_earned: earnings.hra_earned,
        other_earned: earnings.other_earned,
        overtime_amount: overtime.amount,
        gross_salary,
        pf_deduction: deductions.pf_deduction,
        esi_deduction: deductions.esi_deduction,
        welfare_fund_deduction: deductions.welfare_fund_deduction,
        advances_deduction: deductions.advances_deduction,
        total_deductions: deductions.total_deductions,
        net_salary,
    };

    Ok(WageCalculation {
        result,
        audit_steps,
    })
}
