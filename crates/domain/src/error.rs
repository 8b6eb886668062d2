//! Domain error types.

use thiserror::Error;

/// Errors raised at the domain boundary.
///
/// Aggregation itself is total; these surface from ingestion-time
/// classification and configuration-write validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid schedule: start hour {start_hour} must be before end hour {end_hour}")]
    InvalidSchedule { start_hour: u8, end_hour: u8 },

    #[error("Invalid geofence: {0}")]
    InvalidGeofence(String),

    #[error("Invalid polling policy: {0}")]
    InvalidPolicy(String),
}
