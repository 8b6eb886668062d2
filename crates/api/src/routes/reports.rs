//! Attendance report endpoint handlers.
//!
//! Reports are recomputed from stored pings on every request; nothing here
//! is cached or materialized.

use std::collections::{BTreeMap, HashMap};

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use domain::models::{DailyReport, Employee, RangeReport, TodaySummary};
use domain::services::{aggregate_day, aggregate_range, month_bounds, summarize_today};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuery {
    /// Defaults to the current day when omitted.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyQuery {
    pub year: i32,
    pub month: u32,
}

/// Daily report for the authenticated employee.
///
/// GET /api/v1/reports/daily?date=
pub async fn daily_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyReport>, ApiError> {
    let employee = load_employee(&state, user.employee_id).await?;
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(build_daily(&state, &employee, date).await?))
}

/// Range report for the authenticated employee.
///
/// GET /api/v1/reports/range?startDate=&endDate=
pub async fn range_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RangeReport>, ApiError> {
    let employee = load_employee(&state, user.employee_id).await?;
    Ok(Json(
        build_range(&state, &employee, query.start_date, query.end_date).await?,
    ))
}

/// Monthly report for the authenticated employee.
///
/// GET /api/v1/reports/monthly?year=&month=
pub async fn monthly_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<MonthlyQuery>,
) -> Result<Json<RangeReport>, ApiError> {
    let (start, end) = month_bounds(query.year, query.month)
        .ok_or_else(|| ApiError::Validation("Invalid year or month".into()))?;
    let employee = load_employee(&state, user.employee_id).await?;
    Ok(Json(build_range(&state, &employee, start, end).await?))
}

/// Daily report for any employee, admin view.
///
/// GET /api/v1/admin/reports/:user_id/daily?date=
pub async fn employee_daily_report(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyReport>, ApiError> {
    let employee = load_employee(&state, user_id).await?;
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(build_daily(&state, &employee, date).await?))
}

/// Range report for any employee, admin view.
///
/// GET /api/v1/admin/reports/:user_id/range?startDate=&endDate=
pub async fn employee_range_report(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RangeReport>, ApiError> {
    let employee = load_employee(&state, user_id).await?;
    Ok(Json(
        build_range(&state, &employee, query.start_date, query.end_date).await?,
    ))
}

/// Today's attendance across all approved employees.
///
/// GET /api/v1/admin/reports/today-summary
pub async fn today_summary(
    State(state): State<AppState>,
) -> Result<Json<TodaySummary>, ApiError> {
    let today = Utc::now().date_naive();
    let employees = state.employees.list_approved().await?;
    let policy = state.settings.polling_policy().await?;

    let mut pings_by_user = HashMap::new();
    for employee in &employees {
        let pings = state.pings.pings_for_day(employee.id, today).await?;
        pings_by_user.insert(employee.id, pings);
    }

    Ok(Json(summarize_today(
        &employees,
        &pings_by_user,
        policy,
        today,
    )))
}

async fn load_employee(state: &AppState, id: Uuid) -> Result<Employee, ApiError> {
    state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".into()))
}

async fn build_daily(
    state: &AppState,
    employee: &Employee,
    date: NaiveDate,
) -> Result<DailyReport, ApiError> {
    let pings = state.pings.pings_for_day(employee.id, date).await?;
    let policy = state.settings.polling_policy().await?;
    Ok(aggregate_day(date, &pings, employee.schedule, policy))
}

async fn build_range(
    state: &AppState,
    employee: &Employee,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<RangeReport, ApiError> {
    if end < start {
        return Ok(aggregate_range(start, end, Vec::new()));
    }

    let pings = state.pings.pings_in_range(employee.id, start, end).await?;
    let policy = state.settings.polling_policy().await?;

    let mut by_date: BTreeMap<NaiveDate, Vec<_>> = BTreeMap::new();
    for ping in pings {
        by_date
            .entry(ping.recorded_at.date_naive())
            .or_default()
            .push(ping);
    }

    let dailies: Vec<DailyReport> = by_date
        .into_iter()
        .map(|(date, pings)| aggregate_day(date, &pings, employee.schedule, policy))
        .collect();

    Ok(aggregate_range(start, end, dailies))
}
