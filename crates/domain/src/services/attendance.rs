//! Attendance aggregation.
//!
//! Pure functions turning a day's pings plus schedule and policy into the
//! report shapes consumed by the presentation layer. Recomputation over the
//! same ping set is deterministic; the query date is always a parameter,
//! never an internal clock read.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::employee::Employee;
use crate::models::ping::LocationPing;
use crate::models::policy::PollingPolicy;
use crate::models::report::{DailyReport, EmployeeDaySummary, RangeReport, TodaySummary};
use crate::models::schedule::WorkSchedule;

/// Computes the daily report for one employee on one calendar day.
///
/// Presence accrual: the first valid ping is presumed to cover one polling
/// interval; each gap between consecutive valid pings counts as present
/// while it stays within `interval + grace` minutes, and contributes
/// nothing once it exceeds that bound (the gap counts toward absence).
pub fn aggregate_day(
    date: NaiveDate,
    pings: &[LocationPing],
    schedule: WorkSchedule,
    policy: PollingPolicy,
) -> DailyReport {
    let mut pings: Vec<&LocationPing> = pings.iter().collect();
    pings.sort_by_key(|p| p.recorded_at);

    let total_work_hours = schedule.total_hours();
    let total_locations = pings.len() as i64;
    let valid_locations = pings.iter().filter(|p| p.is_valid).count() as i64;

    let work_start_time = pings.first().map(|p| p.recorded_at);

    // The day counts as finished only once the last ping lands at or after
    // the scheduled end hour; otherwise the day is still in progress.
    let end_of_day = NaiveTime::from_hms_opt(u32::from(schedule.end_hour), 0, 0)
        .unwrap_or(NaiveTime::MIN);
    let work_end_time = pings
        .last()
        .filter(|p| p.recorded_at.time() >= end_of_day)
        .map(|p| p.recorded_at);

    let late_minutes = match pings.first() {
        Some(first) => {
            let scheduled_start = Utc
                .from_utc_datetime(&date.and_hms_opt(u32::from(schedule.start_hour), 0, 0)
                    .unwrap_or_else(|| date.and_time(NaiveTime::MIN)));
            (first.recorded_at - scheduled_start).num_minutes().max(0)
        }
        None => 0,
    };

    let max_gap_minutes = f64::from(policy.max_gap_minutes());
    let mut present_minutes = 0.0;
    let mut prev_valid: Option<chrono::DateTime<Utc>> = None;
    for ping in pings.iter().filter(|p| p.is_valid) {
        match prev_valid {
            None => present_minutes += f64::from(policy.interval_minutes),
            Some(prev) => {
                let gap_minutes =
                    (ping.recorded_at - prev).num_seconds() as f64 / 60.0;
                if gap_minutes <= max_gap_minutes {
                    present_minutes += gap_minutes;
                }
            }
        }
        prev_valid = Some(ping.recorded_at);
    }

    let present_hours = round_hours(present_minutes / 60.0);
    let absent_hours = round_hours((total_work_hours - present_hours).max(0.0));

    DailyReport {
        date,
        work_start_time,
        work_end_time,
        total_work_hours,
        present_hours,
        absent_hours,
        total_locations,
        valid_locations,
        late_minutes,
    }
}

/// Rolls daily reports up over a date range.
///
/// Days without any ping are excluded from both the day count and the
/// details; an inverted range is a benign query and yields an empty report.
pub fn aggregate_range(
    start_date: NaiveDate,
    end_date: NaiveDate,
    reports: Vec<DailyReport>,
) -> RangeReport {
    if end_date < start_date {
        return empty_range(start_date, end_date);
    }

    let mut days: Vec<DailyReport> = reports
        .into_iter()
        .filter(|r| r.has_data() && r.date >= start_date && r.date <= end_date)
        .collect();
    days.sort_by_key(|r| r.date);

    let total_work_hours = round_hours(days.iter().map(|r| r.total_work_hours).sum());
    let total_present_hours = round_hours(days.iter().map(|r| r.present_hours).sum());
    let total_absent_hours = round_hours(days.iter().map(|r| r.absent_hours).sum());
    let efficiency_percent = if total_work_hours > 0.0 {
        round_percent(total_present_hours / total_work_hours * 100.0)
    } else {
        0.0
    };

    RangeReport {
        start_date,
        end_date,
        total_days: days.len() as i64,
        total_work_hours,
        total_present_hours,
        total_absent_hours,
        efficiency_percent,
        daily_details: days,
    }
}

/// First and last day of a calendar month, if the month is valid.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_month - Duration::days(1)))
}

/// Cross-employee view of a single day, in stable listing order.
pub fn summarize_today(
    employees: &[Employee],
    pings_by_user: &HashMap<Uuid, Vec<LocationPing>>,
    policy: PollingPolicy,
    date: NaiveDate,
) -> TodaySummary {
    let empty = Vec::new();
    let rows: Vec<EmployeeDaySummary> = employees
        .iter()
        .map(|employee| {
            let pings = pings_by_user.get(&employee.id).unwrap_or(&empty);
            let report = aggregate_day(date, pings, employee.schedule, policy);
            EmployeeDaySummary {
                user_id: employee.id,
                username: employee.username.clone(),
                full_name: employee.full_name.clone(),
                work_hours: employee.schedule.display_window(),
                locations_count: report.total_locations,
                valid_locations: report.valid_locations,
                present_hours: report.present_hours,
                late_minutes: report.late_minutes,
                has_data: report.has_data(),
            }
        })
        .collect();

    TodaySummary {
        date,
        total_employees: employees.len() as i64,
        employees_with_data: rows.iter().filter(|r| r.has_data).count() as i64,
        employees: rows,
    }
}

fn empty_range(start_date: NaiveDate, end_date: NaiveDate) -> RangeReport {
    RangeReport {
        start_date,
        end_date,
        total_days: 0,
        total_work_hours: 0.0,
        total_present_hours: 0.0,
        total_absent_hours: 0.0,
        efficiency_percent: 0.0,
        daily_details: Vec::new(),
    }
}

fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

fn round_percent(percent: f64) -> f64 {
    (percent * 10.0).round() / 10.0
}
