//! Derived attendance reports.
//!
//! Reports are pure views recomputed on demand from pings, schedule and
//! policy; they are never stored as mutable entities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attendance for one employee on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: NaiveDate,
    pub work_start_time: Option<DateTime<Utc>>,
    /// Null while the work day is still in progress.
    pub work_end_time: Option<DateTime<Utc>>,
    pub total_work_hours: f64,
    pub present_hours: f64,
    pub absent_hours: f64,
    pub total_locations: i64,
    pub valid_locations: i64,
    pub late_minutes: i64,
}

impl DailyReport {
    /// Whether any ping was recorded on this day.
    pub fn has_data(&self) -> bool {
        self.total_locations > 0
    }
}

/// Aggregate over a date range; only days with data are included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub total_work_hours: f64,
    pub total_present_hours: f64,
    pub total_absent_hours: f64,
    pub efficiency_percent: f64,
    pub daily_details: Vec<DailyReport>,
}

/// One employee's line in the admin today-summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDaySummary {
    pub user_id: Uuid,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub work_hours: String,
    pub locations_count: i64,
    pub valid_locations: i64,
    pub present_hours: f64,
    pub late_minutes: i64,
    pub has_data: bool,
}

/// Cross-employee view of a single day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodaySummary {
    pub date: NaiveDate,
    pub total_employees: i64,
    pub employees_with_data: i64,
    pub employees: Vec<EmployeeDaySummary>,
}
