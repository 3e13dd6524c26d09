//! Attendance models: daily records, status enum, and the per-period tally.
//!
//! Each daily record carries exactly one mutually exclusive status. Worked
//! and overtime hours are meaningful only on Present days; the invariant is
//! validated when records are aggregated into an [`AttendanceTally`], never
//! silently corrected.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The status of one day of attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked this day.
    Present,
    /// Scheduled weekly off (paid).
    WeeklyOff,
    /// Casual leave (paid).
    CasualLeave,
    /// Earned leave (paid).
    EarnedLeave,
    /// Leave without pay.
    UnpaidLeave,
}

impl AttendanceStatus {
    /// Returns true if a day with this status counts toward paid days.
    ///
    /// Present, weekly off and paid leave (casual or earned) all count;
    /// unpaid leave does not.
    pub fn is_paid(self) -> bool {
        !matches!(self, AttendanceStatus::UnpaidLeave)
    }
}

/// One day of attendance for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The date of the record.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Hours worked; must be positive on Present days and zero otherwise.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Overtime hours; only meaningful on Present days, zero otherwise.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

impl AttendanceRecord {
    /// Validates the status/hours invariant for this record.
    ///
    /// A Present record must carry positive worked hours and non-negative
    /// overtime. Any other status must carry zero worked and overtime
    /// hours.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hours_worked < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                date: self.date,
                message: "hours_worked must not be negative".to_string(),
            });
        }
        if self.overtime_hours < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                date: self.date,
                message: "overtime_hours must not be negative".to_string(),
            });
        }

        match self.status {
            AttendanceStatus::Present => {
                if self.hours_worked <= Decimal::ZERO {
                    return Err(EngineError::InvalidAttendance {
                        date: self.date,
                        message: "present day must carry positive worked hours".to_string(),
                    });
                }
            }
            _ => {
                if self.hours_worked != Decimal::ZERO || self.overtime_hours != Decimal::ZERO {
                    return Err(EngineError::InvalidAttendance {
                        date: self.date,
                        message: format!(
                            "status {:?} must carry zero worked and overtime hours",
                            self.status
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Per-employee, per-period attendance aggregate.
///
/// Built by summing validated daily records; the day counts feed the
/// paid-days pro-ration and the overtime hours feed the overtime amount.
///
/// # Example
///
/// ```
/// use wage_engine::models::{AttendanceRecord, AttendanceStatus, AttendanceTally};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     status: AttendanceStatus::Present,
///     hours_worked: Decimal::from(8),
///     overtime_hours: Decimal::ZERO,
/// }];
/// let tally = AttendanceTally::from_records(&records).unwrap();
/// assert_eq!(tally.present_days, 1);
/// assert_eq!(tally.paid_days(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTally {
    /// Number of days with status Present.
    pub present_days: u32,
    /// Number of weekly-off days.
    pub weekly_off_days: u32,
    /// Number of paid-leave days (casual + earned).
    pub paid_leave_days: u32,
    /// Number of unpaid-leave days.
    pub unpaid_leave_days: u32,
    /// Total overtime hours across all Present days.
    pub overtime_hours: Decimal,
}

impl AttendanceTally {
    /// Aggregates daily records into a tally, validating each record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAttendance`] for the first record that
    /// violates the status/hours invariant. Upstream data-quality problems
    /// are rejected here rather than corrected.
    pub fn from_records(records: &[AttendanceRecord]) -> EngineResult<Self> {
        let mut tally = AttendanceTally {
            present_days: 0,
            weekly_off_days: 0,
            paid_leave_days: 0,
            unpaid_leave_days: 0,
            overtime_hours: Decimal::ZERO,
        };

        for record in records {
            record.validate()?;
            match record.status {
                AttendanceStatus::Present => {
                    tally.present_days += 1;
                    tally.overtime_hours += record.overtime_hours;
                }
                AttendanceStatus::WeeklyOff => tally.weekly_off_days += 1,
                AttendanceStatus::CasualLeave | AttendanceStatus::EarnedLeave => {
                    tally.paid_leave_days += 1;
                }
                AttendanceStatus::UnpaidLeave => tally.unpaid_leave_days += 1,
            }
        }

        Ok(tally)
    }

    /// Days counted toward pro-rated fixed pay.
    ///
    /// Present + weekly off + paid leave; unpaid leave is excluded.
    pub fn paid_days(&self) -> u32 {
        self.present_days + self.weekly_off_days + self.paid_leave_days
    }
}
