//! Request types for the wage calculation engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Advance, AttendanceRecord, AttendanceStatus, CompensationProfile, Period};

/// Request body for the `/calculate` endpoint.
///
/// Contains all information needed to calculate one employee's pay for one
/// payroll period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The payroll period for the calculation.
    pub period: PeriodRequest,
    /// The employee's fixed monthly compensation.
    pub compensation: CompensationRequest,
    /// Daily attendance records for the period.
    pub attendance: Vec<AttendanceRecordRequest>,
    /// Salary advances recorded against the employee.
    #[serde(default)]
    pub advances: Vec<AdvanceRequest>,
}

/// Payroll period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// Fixed compensation components in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly house rent allowance.
    pub hra_amount: Decimal,
    /// Monthly other allowance.
    #[serde(default)]
    pub other_allowance: Decimal,
}

/// One day of attendance in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The date of the record.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Hours worked on the day.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Overtime hours on the day.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// A salary advance in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceRequest {
    /// The date the advance was disbursed.
    pub date: NaiveDate,
    /// The advanced amount.
    pub amount: Decimal,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

impl From<PeriodRequest> for Period {
    fn from(req: PeriodRequest) -> Self {
        Period {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<CompensationRequest> for CompensationProfile {
    fn from(req: CompensationRequest) -> Self {
        CompensationProfile {
            basic_salary: req.basic_salary,
            hra_amount: req.hra_amount,
            other_allowance: req.other_allowance,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            date: req.date,
            status: req.status,
            hours_worked: req.hours_worked,
            overtime_hours: req.overtime_hours,
        }
    }
}

impl From<AdvanceRequest> for Advance {
    fn from(req: AdvanceRequest) -> Self {
        Advance {
            date: req.date,
            amount: req.amount,
            note: req.note,
        }
    }
}
