//! Geofence membership test.

use geo::{HaversineDistance, Point};

use crate::error::DomainError;
use crate::models::geofence::{Coordinates, OfficeGeofence};

/// Outcome of classifying one ping against the office geofence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeofenceCheck {
    pub distance_meters: f64,
    pub is_valid: bool,
}

/// Classifies a coordinate pair against the active geofence.
///
/// Boundary pings count as inside. Coordinates outside the valid ranges are
/// a caller precondition violation and rejected with `InvalidCoordinate`.
pub fn classify(
    latitude: f64,
    longitude: f64,
    fence: &OfficeGeofence,
) -> Result<GeofenceCheck, DomainError> {
    let ping = Coordinates::new(latitude, longitude)?;

    let check = match fence {
        OfficeGeofence::Circle {
            center,
            radius_meters,
        } => {
            let distance_meters = haversine_meters(ping, *center);
            GeofenceCheck {
                distance_meters,
                is_valid: distance_meters <= *radius_meters,
            }
        }
        OfficeGeofence::Area { corner1, corner2 } => {
            let min_lat = corner1.latitude.min(corner2.latitude);
            let max_lat = corner1.latitude.max(corner2.latitude);
            let min_lng = corner1.longitude.min(corner2.longitude);
            let max_lng = corner1.longitude.max(corner2.longitude);

            let inside = (min_lat..=max_lat).contains(&ping.latitude)
                && (min_lng..=max_lng).contains(&ping.longitude);

            // Distance to the nearest point of the rectangle, 0 when inside.
            let distance_meters = if inside {
                0.0
            } else {
                let nearest = Coordinates {
                    latitude: ping.latitude.clamp(min_lat, max_lat),
                    longitude: ping.longitude.clamp(min_lng, max_lng),
                };
                haversine_meters(ping, nearest)
            };

            GeofenceCheck {
                distance_meters,
                is_valid: inside,
            }
        }
    };

    Ok(check)
}

/// Great-circle distance in meters.
fn haversine_meters(a: Coordinates, b: Coordinates) -> f64 {
    let from = Point::new(a.longitude, a.latitude);
    let to = Point::new(b.longitude, b.latitude);
    from.haversine_distance(&to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_center() -> Coordinates {
        Coordinates::new(41.2995, 69.2401).unwrap()
    }

    fn circle(radius_meters: f64) -> OfficeGeofence {
        OfficeGeofence::circle(office_center(), radius_meters).unwrap()
    }

    fn area() -> OfficeGeofence {
        OfficeGeofence::area(
            Coordinates::new(41.2995, 69.2401).unwrap(),
            Coordinates::new(41.3005, 69.2411).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_circle_center_is_valid() {
        let check = classify(41.2995, 69.2401, &circle(100.0)).unwrap();
        assert!(check.is_valid);
        assert!(check.distance_meters < 1e-6);
    }

    #[test]
    fn test_circle_boundary_inclusive() {
        // A point ~150m north of the office; shrinking the radius to exactly
        // the computed distance must still classify as inside.
        let fence = circle(100.0);
        let probe = classify(41.3008, 69.2401, &fence).unwrap();
        assert!(probe.distance_meters > 100.0);

        let exact = OfficeGeofence::circle(office_center(), probe.distance_meters).unwrap();
        let on_boundary = classify(41.3008, 69.2401, &exact).unwrap();
        assert!(on_boundary.is_valid);

        // One meter inside the measured distance puts the ping back outside.
        let tighter =
            OfficeGeofence::circle(office_center(), probe.distance_meters - 1.0).unwrap();
        let beyond = classify(41.3008, 69.2401, &tighter).unwrap();
        assert!(!beyond.is_valid);
    }

    #[test]
    fn test_circle_outside_reports_distance() {
        let check = classify(41.3040, 69.2401, &circle(100.0)).unwrap();
        assert!(!check.is_valid);
        // ~500m north of center
        assert!(check.distance_meters > 400.0 && check.distance_meters < 600.0);
    }

    #[test]
    fn test_area_inside() {
        let check = classify(41.3000, 69.2406, &area()).unwrap();
        assert!(check.is_valid);
        assert_eq!(check.distance_meters, 0.0);
    }

    #[test]
    fn test_area_edge_inclusive() {
        // Exactly on the southern edge.
        let on_edge = classify(41.2995, 69.2406, &area()).unwrap();
        assert!(on_edge.is_valid);
        assert_eq!(on_edge.distance_meters, 0.0);

        // Exactly on a corner.
        let on_corner = classify(41.3005, 69.2411, &area()).unwrap();
        assert!(on_corner.is_valid);
    }

    #[test]
    fn test_area_outside_distance_to_nearest_edge() {
        // South of the rectangle: nearest point is on the southern edge at
        // the ping's own longitude.
        let check = classify(41.2985, 69.2406, &area()).unwrap();
        assert!(!check.is_valid);
        // ~111m per 0.001 degree of latitude
        assert!(check.distance_meters > 80.0 && check.distance_meters < 150.0);
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        assert!(matches!(
            classify(95.0, 69.2401, &circle(100.0)),
            Err(DomainError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            classify(41.0, 200.0, &area()),
            Err(DomainError::InvalidCoordinate { .. })
        ));
    }
}
