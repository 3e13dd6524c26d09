//! Configuration types for the wage calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Policy knobs governing the wage formula.
///
/// The source material contains several divergent formula variants (PF
/// capping, overtime multiplier, whether the other allowance is pro-rated);
/// every point of divergence is a named field here rather than a constant
/// in calculation code.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationPolicy {
    /// Fixed pro-ration denominator, independent of calendar month length.
    pub days_in_period_base: u32,
    /// Standard working hours per day, used to derive the hourly basic rate.
    pub standard_hours_per_day: u32,
    /// Multiplier applied to the hourly basic rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Optional flat ceiling on the provident fund deduction.
    #[serde(default)]
    pub provident_fund_cap: Option<Decimal>,
    /// Gross salary ceiling above which ESI is waived entirely.
    pub esi_ceiling: Decimal,
    /// Whether the other allowance is pro-rated over paid days
    /// (true, the enhanced variant) or paid flat (false, the simple variant).
    #[serde(default = "default_prorate_other_allowance")]
    pub prorate_other_allowance: bool,
}

fn default_prorate_other_allowance() -> bool {
    true
}

impl Default for CalculationPolicy {
    fn default() -> Self {
        Self {
            days_in_period_base: 30,
            standard_hours_per_day: 8,
            overtime_multiplier: Decimal::TWO,
            provident_fund_cap: Some(Decimal::from(1800)),
            esi_ceiling: Decimal::from(21000),
            prorate_other_allowance: true,
        }
    }
}

/// One effective-dated set of statutory deduction rates.
///
/// Exactly one set is effective for a given calculation date: the most
/// recent one whose effective date is on or before that date.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionRates {
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// Provident fund rate in percent, applied to basic earned.
    pub provident_fund_rate: Decimal,
    /// ESI rate in percent, applied to gross salary when at or under the ceiling.
    pub esi_rate: Decimal,
    /// Flat labour welfare fund amount per period.
    pub welfare_fund_fixed_amount: Decimal,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    policy: CalculationPolicy,
    /// Rate sets sorted by effective date ascending.
    rates: Vec<DeductionRates>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(policy: CalculationPolicy, rates: Vec<DeductionRates>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            policy,
            rates: sorted_rates,
        }
    }

    /// Returns the calculation policy.
    pub fn policy(&self) -> &CalculationPolicy {
        &self.policy
    }

    /// Returns all rate sets, sorted by effective date ascending.
    pub fn rates(&self) -> &[DeductionRates] {
        &self.rates
    }

    /// Returns the rate set effective on the given date, if any.
    ///
    /// Rates are sorted ascending, so this finds the most recent set whose
    /// effective date is on or before the requested date.
    pub fn effective_rates(&self, date: NaiveDate) -> Option<&DeductionRates> {
        self.rates.iter().rfind(|r| r.effective_date <= date)
    }
}
