//! Statutory deductions and advance recovery.
//!
//! Provident fund is a percentage of basic earned, optionally capped at a
//! flat ceiling. ESI is a percentage of gross but is waived entirely (not
//! pro-rated, not capped) once gross exceeds the statutory ceiling. The
//! labour welfare fund is a flat amount per period, and advances taken
//! within the period are recovered in full.

use rust_decimal::Decimal;

use crate::config::{CalculationPolicy, DeductionRates};
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the deductions calculation, including the audit steps.
#[derive(Debug, Clone)]
pub struct DeductionsResult {
    /// Provident fund deduction.
    pub pf_deduction: Decimal,
    /// Whether the PF cap was applied.
    pub pf_cap_applied: bool,
    /// ESI deduction (zero when gross exceeds the ceiling).
    pub esi_deduction: Decimal,
    /// Whether ESI was waived because gross exceeded the ceiling.
    pub esi_waived: bool,
    /// Labour welfare fund deduction.
    pub welfare_fund_deduction: Decimal,
    /// Advance recovery for the period.
    pub advances_deduction: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// The audit steps recording each deduction rule.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates all deductions for a period.
///
/// # Arguments
///
/// * `basic_earned` - The pro-rated basic salary (PF base)
/// * `gross_salary` - The gross salary (ESI base and ceiling test)
/// * `rates` - The effective deduction rate set
/// * `advances_total` - Total advances recorded within the period
/// * `policy` - The calculation policy (PF cap, ESI ceiling)
/// * `step_number` - The first step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when any rate, fixed amount, or
/// the advances total is negative.
pub fn calculate_deductions(
    basic_earned: Decimal,
    gross_salary: Decimal,
    rates: &DeductionRates,
    advances_total: Decimal,
    policy: &CalculationPolicy,
    step_number: u32,
) -> EngineResult<DeductionsResult> {
    for (field, amount) in [
        ("provident_fund_rate", rates.provident_fund_rate),
        ("esi_rate", rates.esi_rate),
        ("welfare_fund_fixed_amount", rates.welfare_fund_fixed_amount),
        ("advances_total", advances_total),
    ] {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not be negative, got {}", amount),
            });
        }
    }

    // Provident fund: percent of basic earned, optionally capped.
    let pf_uncapped = basic_earned * rates.provident_fund_rate / Decimal::ONE_HUNDRED;
    let (pf_deduction, pf_cap_applied) = match policy.provident_fund_cap {
        Some(cap) if pf_uncapped > cap => (cap, true),
        _ => (pf_uncapped, false),
    };

    let pf_step = AuditStep {
        step_number,
        rule_id: "provident_fund".to_string(),
        rule_name: "Provident Fund".to_string(),
        input: serde_json::json!({
            "basic_earned": basic_earned.normalize().to_string(),
            "provident_fund_rate": rates.provident_fund_rate.normalize().to_string(),
            "provident_fund_cap": policy.provident_fund_cap.map(|c| c.normalize().to_string())
        }),
        output: serde_json::json!({
            "uncapped": pf_uncapped.normalize().to_string(),
            "amount": pf_deduction.normalize().to_string(),
            "cap_applied": pf_cap_applied
        }),
        reasoning: if pf_cap_applied {
            format!(
                "{}% of basic {} exceeds cap, deducting capped amount {}",
                rates.provident_fund_rate.normalize(),
                basic_earned.normalize(),
                pf_deduction.normalize()
            )
        } else {
            format!(
                "{}% of basic {} = {}",
                rates.provident_fund_rate.normalize(),
                basic_earned.normalize(),
                pf_deduction.normalize()
            )
        },
    };

    // ESI: percent of gross, waived entirely above the ceiling.
    let esi_waived = gross_salary > policy.esi_ceiling;
    let esi_deduction = if esi_waived {
        Decimal::ZERO
    } else {
        gross_salary * rates.esi_rate / Decimal::ONE_HUNDRED
    };

    let esi_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "esi".to_string(),
        rule_name: "Employee State Insurance".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "esi_rate": rates.esi_rate.normalize().to_string(),
            "esi_ceiling": policy.esi_ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": esi_deduction.normalize().to_string(),
            "waived": esi_waived
        }),
        reasoning: if esi_waived {
            format!(
                "Gross {} exceeds ceiling {}, ESI waived entirely",
                gross_salary.normalize(),
                policy.esi_ceiling.normalize()
            )
        } else {
            format!(
                "{}% of gross {} = {}",
                rates.esi_rate.normalize(),
                gross_salary.normalize(),
                esi_deduction.normalize()
            )
        },
    };

    // Flat welfare fund plus advance recovery.
    let welfare_fund_deduction = rates.welfare_fund_fixed_amount;
    let advances_deduction = advances_total;

    let fixed_step = AuditStep {
        step_number: step_number + 2,
        rule_id: "welfare_and_advances".to_string(),
        rule_name: "Welfare Fund and Advance Recovery".to_string(),
        input: serde_json::json!({
            "welfare_fund_fixed_amount": welfare_fund_deduction.normalize().to_string(),
            "advances_total": advances_deduction.normalize().to_string()
        }),
        output: serde_json::json!({
            "welfare_fund_deduction": welfare_fund_deduction.normalize().to_string(),
            "advances_deduction": advances_deduction.normalize().to_string()
        }),
        reasoning: format!(
            "Flat welfare fund {} plus recovery of {} in period advances",
            welfare_fund_deduction.normalize(),
            advances_deduction.normalize()
        ),
    };

    let total_deductions =
        pf_deduction + esi_deduction + welfare_fund_deduction + advances_deduction;

    Ok(DeductionsResult {
        pf_deduction,
        pf_cap_applied,
        esi_deduction,
        esi_waived,
        welfare_fund_deduction,
        advances_deduction,
        total_deductions,
        audit_steps: vec![pf_step, esi_step, fixed_step],
    })
}
