//! Common validation utilities.

use validator::ValidationError;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates that a geofence radius is positive and within a sane bound.
pub fn validate_radius(radius_meters: f64) -> Result<(), ValidationError> {
    if radius_meters > 0.0 && radius_meters <= 50_000.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_range");
        err.message = Some("Radius must be between 0 and 50000 meters".into());
        Err(err)
    }
}

/// Validates a work schedule hour (0 to 23).
pub fn validate_work_hour(hour: u8) -> Result<(), ValidationError> {
    if hour <= 23 {
        Ok(())
    } else {
        let mut err = ValidationError::new("work_hour_range");
        err.message = Some("Work hour must be between 0 and 23".into());
        Err(err)
    }
}

/// Validates a polling interval in minutes (1 to 240).
pub fn validate_interval_minutes(minutes: u32) -> Result<(), ValidationError> {
    if (1..=240).contains(&minutes) {
        Ok(())
    } else {
        let mut err = ValidationError::new("interval_range");
        err.message = Some("Polling interval must be between 1 and 240 minutes".into());
        Err(err)
    }
}

/// Validates a grace period in minutes (0 to 120).
pub fn validate_grace_minutes(minutes: u32) -> Result<(), ValidationError> {
    if minutes <= 120 {
        Ok(())
    } else {
        let mut err = ValidationError::new("grace_range");
        err.message = Some("Grace period must be between 0 and 120 minutes".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-90.1).is_err());
    }

    #[test]
    fn test_validate_latitude_error_message() {
        let err = validate_latitude(100.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Latitude must be between -90 and 90"
        );
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(0.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.1).is_err());
        assert!(validate_longitude(-180.1).is_err());
    }

    #[test]
    fn test_validate_radius() {
        assert!(validate_radius(100.0).is_ok());
        assert!(validate_radius(0.5).is_ok());
        assert!(validate_radius(50_000.0).is_ok());
        assert!(validate_radius(0.0).is_err());
        assert!(validate_radius(-10.0).is_err());
        assert!(validate_radius(50_001.0).is_err());
    }

    #[test]
    fn test_validate_work_hour() {
        assert!(validate_work_hour(0).is_ok());
        assert!(validate_work_hour(23).is_ok());
        assert!(validate_work_hour(24).is_err());
    }

    #[test]
    fn test_validate_interval_minutes() {
        assert!(validate_interval_minutes(1).is_ok());
        assert!(validate_interval_minutes(30).is_ok());
        assert!(validate_interval_minutes(240).is_ok());
        assert!(validate_interval_minutes(0).is_err());
        assert!(validate_interval_minutes(241).is_err());
    }

    #[test]
    fn test_validate_grace_minutes() {
        assert!(validate_grace_minutes(0).is_ok());
        assert!(validate_grace_minutes(5).is_ok());
        assert!(validate_grace_minutes(120).is_ok());
        assert!(validate_grace_minutes(121).is_err());
    }
}
