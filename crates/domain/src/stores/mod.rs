//! Storage capability traits.
//!
//! The aggregation services operate over immutable snapshots fetched from
//! these traits; callers pick an implementation (PostgreSQL or in-memory
//! fixture) once at process start.

pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::employee::{Employee, NewEmployee};
use crate::models::geofence::OfficeGeofence;
use crate::models::ping::{LocationPing, NewPing};
use crate::models::policy::PollingPolicy;
use crate::models::schedule::WorkSchedule;

pub use memory::InMemoryStore;

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Append-only log of location pings.
#[async_trait]
pub trait PingStore: Send + Sync {
    /// Appends a classified ping and returns the stored record.
    async fn insert_ping(&self, ping: NewPing) -> Result<LocationPing, StoreError>;

    /// All pings for a user on one calendar day, ascending by timestamp.
    async fn pings_for_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<LocationPing>, StoreError>;

    /// All pings for a user over an inclusive date range, ascending.
    async fn pings_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LocationPing>, StoreError>;
}

/// Office-wide configuration: geofence and polling policy.
///
/// Updates return the stored value; there is no shared mutable state to
/// patch in place.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn geofence(&self) -> Result<OfficeGeofence, StoreError>;

    async fn set_geofence(&self, fence: OfficeGeofence) -> Result<OfficeGeofence, StoreError>;

    async fn polling_policy(&self) -> Result<PollingPolicy, StoreError>;

    async fn set_polling_policy(
        &self,
        policy: PollingPolicy,
    ) -> Result<PollingPolicy, StoreError>;
}

/// Employee accounts and their schedules.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, StoreError>;

    async fn find_by_telegram_id(&self, telegram_id: i64)
        -> Result<Option<Employee>, StoreError>;

    /// All employees in registration order.
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Approved non-admin employees in registration order.
    async fn list_approved(&self) -> Result<Vec<Employee>, StoreError>;

    /// Marks an employee approved and assigns a schedule.
    async fn approve(&self, id: Uuid, schedule: WorkSchedule) -> Result<Employee, StoreError>;

    /// Withdraws approval from an account without deleting it.
    async fn revoke(&self, id: Uuid) -> Result<Employee, StoreError>;

    /// Deletes an account outright (rejecting a pending registration).
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn update_schedule(
        &self,
        id: Uuid,
        schedule: WorkSchedule,
    ) -> Result<Employee, StoreError>;
}
