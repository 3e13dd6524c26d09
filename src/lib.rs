//! Payroll Wage Calculation Engine
//!
//! This crate converts an employee's fixed compensation components and a
//! period's attendance tally into gross pay, statutory deductions (provident
//! fund, employee state insurance, labour welfare fund) and net pay.
//! Deduction rates are effective-dated and every policy knob (pro-ration
//! base, overtime multiplier, PF cap, ESI ceiling) is configuration, not a
//! constant in calculation code.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
