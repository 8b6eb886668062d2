//! Location endpoint handlers.

use axum::{extract::State, Extension, Json};
use chrono::{Duration, Utc};
use tracing::info;
use validator::Validate;

use domain::models::{NewPing, PingResponse, SubmitPingRequest, TodayStatusResponse};
use domain::services::classify;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Submit a location ping for the authenticated employee.
///
/// The ping is classified against the active geofence at submission time and
/// stored immutably; later geofence changes do not reclassify it.
///
/// POST /api/v1/locations
pub async fn submit_ping(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<SubmitPingRequest>,
) -> Result<Json<PingResponse>, ApiError> {
    request.validate()?;

    let fence = state.settings.geofence().await?;
    let check = classify(request.latitude, request.longitude, &fence)?;

    let ping = state
        .pings
        .insert_ping(NewPing {
            user_id: user.employee_id,
            latitude: request.latitude,
            longitude: request.longitude,
            distance_meters: check.distance_meters,
            is_valid: check.is_valid,
            recorded_at: Utc::now(),
        })
        .await?;

    info!(
        employee_id = %user.employee_id,
        distance_meters = ping.distance_meters,
        is_valid = ping.is_valid,
        "Location ping recorded"
    );

    Ok(Json(PingResponse::from(ping)))
}

/// The caller's in-office status for the current day.
///
/// GET /api/v1/locations/today
pub async fn today_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<TodayStatusResponse>, ApiError> {
    let employee = state
        .employees
        .find_by_id(user.employee_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".into()))?;

    let now = Utc::now();
    let today = now.date_naive();
    let pings = state.pings.pings_for_day(user.employee_id, today).await?;
    let policy = state.settings.polling_policy().await?;

    // "Currently in office" means the latest ping is valid and no staler
    // than one polling interval plus grace.
    let is_currently_in_office = pings
        .last()
        .map(|p| {
            p.is_valid
                && now - p.recorded_at
                    <= Duration::minutes(i64::from(policy.max_gap_minutes()))
        })
        .unwrap_or(false);

    Ok(Json(TodayStatusResponse {
        date: today,
        locations_count: pings.len() as i64,
        valid_locations: pings.iter().filter(|p| p.is_valid).count() as i64,
        is_currently_in_office,
        first_location_time: pings.first().map(|p| p.recorded_at),
        last_location_time: pings.last().map(|p| p.recorded_at),
        work_start_hour: employee.schedule.start_hour,
        work_end_hour: employee.schedule.end_hour,
    }))
}
