//! Compensation profile model.
//!
//! This module defines the fixed monthly pay components of an employee.
//! The profile is owned by the employee master record and is treated as
//! immutable within a single payroll period once calculation has run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed pay components for one employee.
///
/// All amounts are full-month figures in a currency-agnostic decimal;
/// pro-ration over the period base happens in the calculation layer.
///
/// # Example
///
/// ```
/// use wage_engine::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     basic_salary: Decimal::from(13500),
///     hra_amount: Decimal::from(7500),
///     other_allowance: Decimal::ZERO,
/// };
/// assert_eq!(profile.fixed_total(), Decimal::from(21000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly house rent allowance.
    pub hra_amount: Decimal,
    /// Monthly other allowance.
    #[serde(default)]
    pub other_allowance: Decimal,
}

impl CompensationProfile {
    /// Returns the sum of all fixed monthly components.
    pub fn fixed_total(&self) -> Decimal {
        self.basic_salary + self.hra_amount + self.other_allowance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_profile() {
        let json = r#"{
            "basic_salary": "13500",
            "hra_amount": "7500",
            "other_allowance": "1200"
        }"#;

        let profile: CompensationProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.basic_salary, dec("13500"));
        assert_eq!(profile.hra_amount, dec("7500"));
        assert_eq!(profile.other_allowance, dec("1200"));
    }

    #[test]
    fn test_other_allowance_defaults_to_zero() {
        let json = r#"{
            "basic_salary": "13500",
            "hra_amount": "7500"
        }"#;

        let profile: CompensationProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.other_allowance, Decimal::ZERO);
    }

    #[test]
    fn test_fixed_total() {
        let profile = CompensationProfile {
            basic_salary: dec("13500"),
            hra_amount: dec("7500"),
            other_allowance: dec("1200"),
        };
        assert_eq!(profile.fixed_total(), dec("22200"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let profile = CompensationProfile {
            basic_salary: dec("18000.50"),
            hra_amount: dec("9000"),
            other_allowance: dec("500"),
        };

        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: CompensationProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }
}
