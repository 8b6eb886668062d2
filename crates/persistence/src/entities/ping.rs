//! Location ping entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the location_pings table.
#[derive(Debug, Clone, FromRow)]
pub struct PingEntity {
    pub id: i64,
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_meters: f64,
    pub is_valid: bool,
    pub recorded_at: DateTime<Utc>,
}

impl From<PingEntity> for domain::models::LocationPing {
    fn from(entity: PingEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            distance_meters: entity.distance_meters,
            is_valid: entity.is_valid,
            recorded_at: entity.recorded_at,
        }
    }
}
