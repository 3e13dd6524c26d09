//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] output record, the audit
//! trace types that document every calculation decision, and the
//! [`CalculationOutcome`] envelope returned by the API.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Period;

/// The output record of one wage calculation.
///
/// Created fresh per (employee, period) calculation and never mutated; a
/// recalculation produces a new result. All amounts carry full precision
/// until [`PayrollResult::rounded`] is applied at the display/persistence
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Paid days used as the pro-ration numerator.
    pub paid_days: u32,
    /// Basic salary earned for the period.
    pub basic_earned: Decimal,
    /// House rent allowance earned for the period.
    pub hra_earned: Decimal,
    /// Other allowance earned for the period.
    pub other_earned: Decimal,
    /// Overtime amount for the period.
    pub overtime_amount: Decimal,
    /// Gross salary (earnings plus overtime).
    pub gross_salary: Decimal,
    /// Provident fund deduction.
    pub pf_deduction: Decimal,
    /// Employee state insurance deduction.
    pub esi_deduction: Decimal,
    /// Labour welfare fund deduction.
    pub welfare_fund_deduction: Decimal,
    /// Recovery of advances taken within the period.
    pub advances_deduction: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Net salary (gross minus total deductions).
    pub net_salary: Decimal,
}

impl PayrollResult {
    /// Returns a copy with every monetary field rounded to 2 decimal places.
    ///
    /// Rounding uses half-away-from-zero and happens once here, not in the
    /// middle of the calculation, so rounding error never compounds across
    /// steps.
    pub fn rounded(&self) -> Self {
        let round = |d: Decimal| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            paid_days: self.paid_days,
            basic_earned: round(self.basic_earned),
            hra_earned: round(self.hra_earned),
            other_earned: round(self.other_earned),
            overtime_amount: round(self.overtime_amount),
            gross_salary: round(self.gross_salary),
            pf_deduction: round(self.pf_deduction),
            esi_deduction: round(self.esi_deduction),
            welfare_fund_deduction: round(self.welfare_fund_deduction),
            advances_deduction: round(self.advances_deduction),
            total_deductions: round(self.total_deductions),
            net_salary: round(self.net_salary),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency and compliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete outcome of a wage calculation as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The payroll period for this calculation.
    pub period: Period,
    /// The payroll result, rounded to 2 decimal places.
    pub payroll: PayrollResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
