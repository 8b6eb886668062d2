//! Location ping repository.

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use domain::models::{LocationPing, NewPing};
use domain::stores::{PingStore, StoreError};

use super::map_sqlx_error;
use crate::entities::PingEntity;

/// PostgreSQL-backed append-only ping log.
#[derive(Clone)]
pub struct PingRepository {
    pool: PgPool,
}

impl PingRepository {
    /// Creates a new PingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// UTC instant at the start of a calendar day.
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

#[async_trait]
impl PingStore for PingRepository {
    async fn insert_ping(&self, ping: NewPing) -> Result<LocationPing, StoreError> {
        let entity = sqlx::query_as::<_, PingEntity>(
            r#"
            INSERT INTO location_pings (user_id, latitude, longitude, distance_meters,
                                        is_valid, recorded_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(ping.user_id)
        .bind(ping.latitude)
        .bind(ping.longitude)
        .bind(ping.distance_meters)
        .bind(ping.is_valid)
        .bind(ping.recorded_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into())
    }

    async fn pings_for_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<LocationPing>, StoreError> {
        self.pings_in_range(user_id, date, date).await
    }

    async fn pings_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LocationPing>, StoreError> {
        let entities = sqlx::query_as::<_, PingEntity>(
            r#"
            SELECT * FROM location_pings
            WHERE user_id = $1 AND recorded_at >= $2 AND recorded_at < $3
            ORDER BY recorded_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .bind(day_start(start))
        .bind(day_start(end) + Duration::days(1))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_start_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let start = day_start(date);
        assert_eq!(start.to_rfc3339(), "2025-03-10T00:00:00+00:00");
    }
}
