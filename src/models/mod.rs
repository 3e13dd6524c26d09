//! Core data models for the wage calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod advance;
mod attendance;
mod compensation;
mod period;
mod result;

pub use advance::{Advance, advances_total};
pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceTally};
pub use compensation::CompensationProfile;
pub use period::Period;
pub use result::{AuditStep, AuditTrace, CalculationOutcome, PayrollResult};
