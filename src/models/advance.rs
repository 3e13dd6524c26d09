//! Salary advance model.
//!
//! Advances taken during a period are recovered in full from that period's
//! net salary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Period;

/// A salary advance recorded against an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    /// The date the advance was disbursed.
    pub date: NaiveDate,
    /// The advanced amount.
    pub amount: Decimal,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Sums the advances that fall within the given period.
///
/// Advances dated outside the period are ignored; recovering them belongs
/// to the period in which they were recorded.
pub fn advances_total(advances: &[Advance], period: &Period) -> Decimal {
    advances
        .iter()
        .filter(|a| period.contains_date(a.date))
        .map(|a| a.amount)
        .sum()
}
