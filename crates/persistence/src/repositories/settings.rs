//! Office settings repository.
//!
//! Settings are persisted as key/JSON rows; missing keys fall back to the
//! seed defaults so a fresh database behaves like the fixture store.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;

use domain::models::{Coordinates, OfficeGeofence, PollingPolicy};
use domain::stores::{ConfigStore, StoreError};

use super::map_sqlx_error;

const GEOFENCE_KEY: &str = "office_geofence";
const POLICY_KEY: &str = "polling_policy";

/// PostgreSQL-backed office configuration.
#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT value FROM settings WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        match row {
            Some((value,)) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StoreError::Backend(format!("corrupt setting {key}: {e}"))),
            None => Ok(None),
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_value(value)
            .map_err(|e| StoreError::Backend(format!("unserializable setting {key}: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(json)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

/// Seed geofence for a fresh deployment.
fn default_geofence() -> OfficeGeofence {
    OfficeGeofence::Circle {
        center: Coordinates {
            latitude: 41.2995,
            longitude: 69.2401,
        },
        radius_meters: 100.0,
    }
}

#[async_trait]
impl ConfigStore for SettingsRepository {
    async fn geofence(&self) -> Result<OfficeGeofence, StoreError> {
        Ok(self
            .read::<OfficeGeofence>(GEOFENCE_KEY)
            .await?
            .unwrap_or_else(default_geofence))
    }

    async fn set_geofence(&self, fence: OfficeGeofence) -> Result<OfficeGeofence, StoreError> {
        self.write(GEOFENCE_KEY, &fence).await?;
        Ok(fence)
    }

    async fn polling_policy(&self) -> Result<PollingPolicy, StoreError> {
        Ok(self
            .read::<PollingPolicy>(POLICY_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn set_polling_policy(
        &self,
        policy: PollingPolicy,
    ) -> Result<PollingPolicy, StoreError> {
        self.write(POLICY_KEY, &policy).await?;
        Ok(policy)
    }
}
