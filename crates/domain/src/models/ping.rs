//! Location ping domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One geolocation report submitted by an employee.
///
/// Immutable once ingested; the distance and validity are computed against
/// the office geofence active at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPing {
    pub id: i64,
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_meters: f64,
    pub is_valid: bool,
    pub recorded_at: DateTime<Utc>,
}

/// A ping about to be inserted, after geofence classification.
#[derive(Debug, Clone)]
pub struct NewPing {
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_meters: f64,
    pub is_valid: bool,
    pub recorded_at: DateTime<Utc>,
}

/// Request payload for submitting a location ping.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPingRequest {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,
}

/// Response payload for a stored ping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_meters: f64,
    pub is_valid: bool,
    pub recorded_at: DateTime<Utc>,
}

impl From<LocationPing> for PingResponse {
    fn from(p: LocationPing) -> Self {
        Self {
            id: p.id,
            latitude: p.latitude,
            longitude: p.longitude,
            distance_meters: p.distance_meters,
            is_valid: p.is_valid,
            recorded_at: p.recorded_at,
        }
    }
}

/// The caller's in-office status for the current day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStatusResponse {
    pub date: NaiveDate,
    pub locations_count: i64,
    pub valid_locations: i64,
    pub is_currently_in_office: bool,
    pub first_location_time: Option<DateTime<Utc>>,
    pub last_location_time: Option<DateTime<Utc>>,
    pub work_start_hour: u8,
    pub work_end_hour: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_ping_request_validation() {
        let ok = SubmitPingRequest {
            latitude: 41.2995,
            longitude: 69.2401,
        };
        assert!(ok.validate().is_ok());

        let bad = SubmitPingRequest {
            latitude: 120.0,
            longitude: 69.2401,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_ping_serialization_field_names() {
        let ping = LocationPing {
            id: 7,
            user_id: Uuid::new_v4(),
            latitude: 41.2995,
            longitude: 69.2401,
            distance_meters: 12.5,
            is_valid: true,
            recorded_at: Utc::now(),
        };
        let json = serde_json::to_string(&ping).unwrap();
        assert!(json.contains("\"distanceMeters\":12.5"));
        assert!(json.contains("\"isValid\":true"));
        assert!(json.contains("\"recordedAt\""));
    }

    #[test]
    fn test_ping_response_from_ping() {
        let ping = LocationPing {
            id: 3,
            user_id: Uuid::new_v4(),
            latitude: 1.0,
            longitude: 2.0,
            distance_meters: 520.0,
            is_valid: false,
            recorded_at: Utc::now(),
        };
        let response = PingResponse::from(ping.clone());
        assert_eq!(response.id, 3);
        assert_eq!(response.distance_meters, 520.0);
        assert!(!response.is_valid);
    }
}
