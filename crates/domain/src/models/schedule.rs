//! Per-employee work schedule.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The daily window in which pings are expected, in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSchedule {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl WorkSchedule {
    /// Creates a schedule. Hours must be 0-23 with start strictly before end.
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self, DomainError> {
        if start_hour > 23 || end_hour > 23 || start_hour >= end_hour {
            return Err(DomainError::InvalidSchedule {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Scheduled work hours per day.
    pub fn total_hours(&self) -> f64 {
        f64::from(self.end_hour - self.start_hour)
    }

    /// Human-readable window, e.g. "9:00 - 18:00".
    pub fn display_window(&self) -> String {
        format!("{}:00 - {}:00", self.start_hour, self.end_hour)
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 18,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_valid() {
        let s = WorkSchedule::new(9, 18).unwrap();
        assert_eq!(s.total_hours(), 9.0);
        assert_eq!(s.display_window(), "9:00 - 18:00");
    }

    #[test]
    fn test_schedule_rejects_inverted_window() {
        assert!(matches!(
            WorkSchedule::new(18, 9),
            Err(DomainError::InvalidSchedule { .. })
        ));
        assert!(WorkSchedule::new(9, 9).is_err());
    }

    #[test]
    fn test_schedule_rejects_out_of_range_hours() {
        assert!(WorkSchedule::new(0, 24).is_err());
        assert!(WorkSchedule::new(25, 26).is_err());
        assert!(WorkSchedule::new(0, 23).is_ok());
    }

    #[test]
    fn test_schedule_default() {
        let s = WorkSchedule::default();
        assert_eq!(s.start_hour, 9);
        assert_eq!(s.end_hour, 18);
    }

    #[test]
    fn test_schedule_serialization() {
        let s = WorkSchedule::new(8, 17).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"startHour":8,"endHour":17}"#);
    }
}
