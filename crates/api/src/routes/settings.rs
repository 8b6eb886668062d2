//! Office settings endpoint handlers.

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use domain::models::{
    Coordinates, OfficeGeofence, OfficeSettingsResponse, PollingPolicy, UpdateAreaRequest,
    UpdateCircleRequest, UpdatePollingPolicyRequest,
};

use crate::app::AppState;
use crate::error::ApiError;

/// Active geofence and polling policy, visible to any authenticated employee.
///
/// GET /api/v1/settings/office
pub async fn office_settings(
    State(state): State<AppState>,
) -> Result<Json<OfficeSettingsResponse>, ApiError> {
    let geofence = state.settings.geofence().await?;
    let polling_policy = state.settings.polling_policy().await?;
    Ok(Json(OfficeSettingsResponse {
        geofence,
        polling_policy,
    }))
}

/// Switch the office to a circular geofence.
///
/// PUT /api/v1/admin/settings/office/circle
pub async fn update_circle(
    State(state): State<AppState>,
    Json(request): Json<UpdateCircleRequest>,
) -> Result<Json<OfficeGeofence>, ApiError> {
    request.validate()?;

    let center = Coordinates::new(request.latitude, request.longitude)?;
    let fence = OfficeGeofence::circle(center, request.radius_meters)?;
    let stored = state.settings.set_geofence(fence).await?;

    info!(
        latitude = request.latitude,
        longitude = request.longitude,
        radius_meters = request.radius_meters,
        "Office geofence switched to circle mode"
    );

    Ok(Json(stored))
}

/// Switch the office to a rectangular geofence.
///
/// PUT /api/v1/admin/settings/office/area
pub async fn update_area(
    State(state): State<AppState>,
    Json(request): Json<UpdateAreaRequest>,
) -> Result<Json<OfficeGeofence>, ApiError> {
    request.validate()?;

    let corner1 = Coordinates::new(request.corner1_lat, request.corner1_lng)?;
    let corner2 = Coordinates::new(request.corner2_lat, request.corner2_lng)?;
    let fence = OfficeGeofence::area(corner1, corner2)?;
    let stored = state.settings.set_geofence(fence).await?;

    info!("Office geofence switched to area mode");

    Ok(Json(stored))
}

/// Update the process-wide polling policy.
///
/// PUT /api/v1/admin/settings/polling
pub async fn update_polling_policy(
    State(state): State<AppState>,
    Json(request): Json<UpdatePollingPolicyRequest>,
) -> Result<Json<PollingPolicy>, ApiError> {
    request.validate()?;

    let policy = PollingPolicy::new(request.interval_minutes, request.grace_minutes)?;
    let stored = state.settings.set_polling_policy(policy).await?;

    info!(
        interval_minutes = stored.interval_minutes,
        grace_minutes = stored.grace_minutes,
        "Polling policy updated"
    );

    Ok(Json(stored))
}
