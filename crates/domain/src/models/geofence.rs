//! Office geofence domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::models::policy::PollingPolicy;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Creates coordinates, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// The office boundary against which pings are validated.
///
/// Exactly one mode is active at a time; switching mode replaces the whole
/// value rather than toggling a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum OfficeGeofence {
    #[serde(rename_all = "camelCase")]
    Circle {
        center: Coordinates,
        radius_meters: f64,
    },
    #[serde(rename_all = "camelCase")]
    Area {
        corner1: Coordinates,
        corner2: Coordinates,
    },
}

impl OfficeGeofence {
    /// Creates a circular geofence. Radius must be positive.
    pub fn circle(center: Coordinates, radius_meters: f64) -> Result<Self, DomainError> {
        if radius_meters <= 0.0 {
            return Err(DomainError::InvalidGeofence(
                "radius must be positive".into(),
            ));
        }
        Ok(Self::Circle {
            center,
            radius_meters,
        })
    }

    /// Creates a rectangular geofence from two opposite corners.
    ///
    /// Corners must differ in both latitude and longitude, otherwise the
    /// rectangle would be degenerate.
    pub fn area(corner1: Coordinates, corner2: Coordinates) -> Result<Self, DomainError> {
        if corner1.latitude == corner2.latitude || corner1.longitude == corner2.longitude {
            return Err(DomainError::InvalidGeofence(
                "area corners must differ in both latitude and longitude".into(),
            ));
        }
        Ok(Self::Area { corner1, corner2 })
    }
}

/// Request payload for switching the office to circle mode.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCircleRequest {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[validate(custom(function = "shared::validation::validate_radius"))]
    pub radius_meters: f64,
}

/// Request payload for switching the office to area mode.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAreaRequest {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub corner1_lat: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub corner1_lng: f64,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub corner2_lat: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub corner2_lng: f64,
}

/// Response payload for office settings queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeSettingsResponse {
    pub geofence: OfficeGeofence,
    pub polling_policy: PollingPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_valid_range() {
        assert!(Coordinates::new(41.2995, 69.2401).is_ok());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinates_out_of_range() {
        assert!(matches!(
            Coordinates::new(91.0, 0.0),
            Err(DomainError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            Coordinates::new(0.0, -181.0),
            Err(DomainError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_circle_requires_positive_radius() {
        let center = Coordinates::new(41.2995, 69.2401).unwrap();
        assert!(OfficeGeofence::circle(center, 100.0).is_ok());
        assert!(OfficeGeofence::circle(center, 0.0).is_err());
        assert!(OfficeGeofence::circle(center, -5.0).is_err());
    }

    #[test]
    fn test_area_rejects_degenerate_rectangle() {
        let c1 = Coordinates::new(41.2995, 69.2401).unwrap();
        let same_lat = Coordinates::new(41.2995, 69.2411).unwrap();
        let same_lng = Coordinates::new(41.3005, 69.2401).unwrap();
        let opposite = Coordinates::new(41.3005, 69.2411).unwrap();

        assert!(OfficeGeofence::area(c1, opposite).is_ok());
        assert!(OfficeGeofence::area(c1, same_lat).is_err());
        assert!(OfficeGeofence::area(c1, same_lng).is_err());
    }

    #[test]
    fn test_geofence_serialization_is_tagged() {
        let fence = OfficeGeofence::circle(Coordinates::new(41.2995, 69.2401).unwrap(), 100.0)
            .unwrap();
        let json = serde_json::to_string(&fence).unwrap();
        assert!(json.contains("\"mode\":\"circle\""));
        assert!(json.contains("\"radiusMeters\":100"));
    }

    #[test]
    fn test_geofence_deserialization_roundtrip() {
        let json = r#"{
            "mode": "area",
            "corner1": {"latitude": 41.2995, "longitude": 69.2401},
            "corner2": {"latitude": 41.3005, "longitude": 69.2411}
        }"#;
        let fence: OfficeGeofence = serde_json::from_str(json).unwrap();
        match fence {
            OfficeGeofence::Area { corner1, corner2 } => {
                assert_eq!(corner1.latitude, 41.2995);
                assert_eq!(corner2.longitude, 69.2411);
            }
            _ => panic!("expected area mode"),
        }
    }

    #[test]
    fn test_update_circle_request_validation() {
        let ok = UpdateCircleRequest {
            latitude: 41.2995,
            longitude: 69.2401,
            radius_meters: 100.0,
        };
        assert!(ok.validate().is_ok());

        let bad_radius = UpdateCircleRequest {
            radius_meters: 0.0,
            ..ok.clone()
        };
        assert!(bad_radius.validate().is_err());

        let bad_lat = UpdateCircleRequest {
            latitude: 95.0,
            ..ok
        };
        assert!(bad_lat.validate().is_err());
    }
}
