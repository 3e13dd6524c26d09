//! Calculation logic for the wage calculation engine.
//!
//! This module contains the calculation functions for determining pay:
//! pro-rated earnings over the fixed period base, overtime from the hourly
//! basic rate, statutory deductions (provident fund with optional cap, ESI
//! with a hard ceiling cutoff, flat welfare fund), advance recovery, and
//! the full pipeline that assembles a payroll result.

mod deductions;
mod earnings;
mod overtime;
mod wage;

pub use deductions::{DeductionsResult, calculate_deductions};
pub use earnings::{EarningsResult, calculate_earnings};
pub use overtime::{OvertimeResult, calculate_overtime};
pub use wage::{WageCalculation, calculate_wage};
