//! In-memory fixture implementation of the storage traits.
//!
//! Backs tests and the `storage.backend = "memory"` configuration; seeded
//! with the same defaults the original deployment shipped with.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::{ConfigStore, EmployeeStore, PingStore, StoreError};
use crate::models::employee::{Employee, NewEmployee};
use crate::models::geofence::{Coordinates, OfficeGeofence};
use crate::models::ping::{LocationPing, NewPing};
use crate::models::policy::PollingPolicy;
use crate::models::schedule::WorkSchedule;

/// Lock-guarded maps standing in for the database.
pub struct InMemoryStore {
    pings: RwLock<Vec<LocationPing>>,
    employees: RwLock<Vec<Employee>>,
    geofence: RwLock<OfficeGeofence>,
    policy: RwLock<PollingPolicy>,
    next_ping_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let center = Coordinates {
            latitude: 41.2995,
            longitude: 69.2401,
        };
        Self {
            pings: RwLock::new(Vec::new()),
            employees: RwLock::new(Vec::new()),
            geofence: RwLock::new(OfficeGeofence::Circle {
                center,
                radius_meters: 100.0,
            }),
            policy: RwLock::new(PollingPolicy::default()),
            next_ping_id: AtomicI64::new(1),
        }
    }

    fn lock_poisoned() -> StoreError {
        StoreError::Backend("in-memory store lock poisoned".into())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PingStore for InMemoryStore {
    async fn insert_ping(&self, ping: NewPing) -> Result<LocationPing, StoreError> {
        let stored = LocationPing {
            id: self.next_ping_id.fetch_add(1, Ordering::SeqCst),
            user_id: ping.user_id,
            latitude: ping.latitude,
            longitude: ping.longitude,
            distance_meters: ping.distance_meters,
            is_valid: ping.is_valid,
            recorded_at: ping.recorded_at,
        };
        let mut pings = self.pings.write().map_err(|_| Self::lock_poisoned())?;
        pings.push(stored.clone());
        Ok(stored)
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
        let pings = self.pings.read().map_err(|_| Self::lock_poisoned())?;
        let mut matched: Vec<LocationPing> = pings
            .iter()
            .filter(|p| {
                let date = p.recorded_at.date_naive();
                p.user_id == user_id && date >= start && date <= end
            })
            .cloned()
            .collect();
        matched.sort_by_key(|p| p.recorded_at);
        Ok(matched)
    }
}

#[async_trait]
impl ConfigStore for InMemoryStore {
    async fn geofence(&self) -> Result<OfficeGeofence, StoreError> {
        let fence = self.geofence.read().map_err(|_| Self::lock_poisoned())?;
        Ok(fence.clone())
    }

    async fn set_geofence(&self, fence: OfficeGeofence) -> Result<OfficeGeofence, StoreError> {
        let mut current = self.geofence.write().map_err(|_| Self::lock_poisoned())?;
        *current = fence.clone();
        Ok(fence)
    }

    async fn polling_policy(&self) -> Result<PollingPolicy, StoreError> {
        let policy = self.policy.read().map_err(|_| Self::lock_poisoned())?;
        Ok(*policy)
    }

    async fn set_polling_policy(
        &self,
        policy: PollingPolicy,
    ) -> Result<PollingPolicy, StoreError> {
        let mut current = self.policy.write().map_err(|_| Self::lock_poisoned())?;
        *current = policy;
        Ok(policy)
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, StoreError> {
        let stored = Employee {
            id: Uuid::new_v4(),
            telegram_id: employee.telegram_id,
            username: employee.username,
            full_name: employee.full_name,
            // Admin accounts skip the approval queue.
            is_approved: employee.is_admin,
            is_admin: employee.is_admin,
            schedule: WorkSchedule::default(),
            created_at: Utc::now(),
        };
        let mut employees = self.employees.write().map_err(|_| Self::lock_poisoned())?;
        employees.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, StoreError> {
        let employees = self.employees.read().map_err(|_| Self::lock_poisoned())?;
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<Employee>, StoreError> {
        let employees = self.employees.read().map_err(|_| Self::lock_poisoned())?;
        Ok(employees
            .iter()
            .find(|e| e.telegram_id == telegram_id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = self.employees.read().map_err(|_| Self::lock_poisoned())?;
        Ok(employees.clone())
    }

    async fn list_approved(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = self.employees.read().map_err(|_| Self::lock_poisoned())?;
        Ok(employees
            .iter()
            .filter(|e| e.is_approved && !e.is_admin)
            .cloned()
            .collect())
    }

    async fn approve(&self, id: Uuid, schedule: WorkSchedule) -> Result<Employee, StoreError> {
        let mut employees = self.employees.write().map_err(|_| Self::lock_poisoned())?;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        employee.is_approved = true;
        employee.schedule = schedule;
        Ok(employee.clone())
    }

    async fn revoke(&self, id: Uuid) -> Result<Employee, StoreError> {
        let mut employees = self.employees.write().map_err(|_| Self::lock_poisoned())?;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        employee.is_approved = false;
        Ok(employee.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut employees = self.employees.write().map_err(|_| Self::lock_poisoned())?;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn update_schedule(
        &self,
        id: Uuid,
        schedule: WorkSchedule,
    ) -> Result<Employee, StoreError> {
        let mut employees = self.employees.write().map_err(|_| Self::lock_poisoned())?;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        employee.schedule = schedule;
        Ok(employee.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_ping(user_id: Uuid, date: NaiveDate, hour: u32) -> NewPing {
        NewPing {
            user_id,
            latitude: 41.2995,
            longitude: 69.2401,
            distance_meters: 5.0,
            is_valid: true,
            recorded_at: Utc.from_utc_datetime(&date.and_hms_opt(hour, 0, 0).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let a = store.insert_ping(new_ping(user_id, date, 9)).await.unwrap();
        let b = store.insert_ping(new_ping(user_id, date, 10)).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_pings_for_day_filters_user_and_date() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let next = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();

        store.insert_ping(new_ping(user_id, date, 10)).await.unwrap();
        store.insert_ping(new_ping(user_id, date, 9)).await.unwrap();
        store.insert_ping(new_ping(user_id, next, 9)).await.unwrap();
        store.insert_ping(new_ping(other, date, 9)).await.unwrap();

        let day = store.pings_for_day(user_id, date).await.unwrap();
        assert_eq!(day.len(), 2);
        // Ascending by timestamp regardless of insertion order.
        assert!(day[0].recorded_at < day[1].recorded_at);

        let range = store.pings_in_range(user_id, date, next).await.unwrap();
        assert_eq!(range.len(), 3);
    }

    #[tokio::test]
    async fn test_default_config_seeded() {
        let store = InMemoryStore::new();
        let fence = store.geofence().await.unwrap();
        assert!(matches!(fence, OfficeGeofence::Circle { radius_meters, .. } if radius_meters == 100.0));
        let policy = store.polling_policy().await.unwrap();
        assert_eq!(policy.interval_minutes, 30);
        assert_eq!(policy.grace_minutes, 5);
    }

    #[tokio::test]
    async fn test_set_geofence_returns_new_value() {
        let store = InMemoryStore::new();
        let fence = OfficeGeofence::area(
            Coordinates::new(41.2995, 69.2401).unwrap(),
            Coordinates::new(41.3005, 69.2411).unwrap(),
        )
        .unwrap();
        let updated = store.set_geofence(fence.clone()).await.unwrap();
        assert_eq!(updated, fence);
        assert_eq!(store.geofence().await.unwrap(), fence);
    }

    #[tokio::test]
    async fn test_employee_lifecycle() {
        let store = InMemoryStore::new();
        let created = store
            .insert(NewEmployee {
                telegram_id: 42,
                username: Some("jdoe".into()),
                full_name: Some("J. Doe".into()),
                is_admin: false,
            })
            .await
            .unwrap();
        assert!(!created.is_approved);

        let found = store.find_by_telegram_id(42).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);

        // Unapproved employees are not listed for reporting.
        assert!(store.list_approved().await.unwrap().is_empty());

        let schedule = WorkSchedule::new(8, 17).unwrap();
        let approved = store.approve(created.id, schedule).await.unwrap();
        assert!(approved.is_approved);
        assert_eq!(approved.schedule, schedule);
        assert_eq!(store.list_approved().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_admins_are_auto_approved_and_excluded_from_listing() {
        let store = InMemoryStore::new();
        let admin = store
            .insert(NewEmployee {
                telegram_id: 1,
                username: None,
                full_name: None,
                is_admin: true,
            })
            .await
            .unwrap();
        assert!(admin.is_approved);
        assert!(store.list_approved().await.unwrap().is_empty());
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_revoke_withdraws_approval() {
        let store = InMemoryStore::new();
        let created = store
            .insert(NewEmployee {
                telegram_id: 42,
                username: None,
                full_name: None,
                is_admin: false,
            })
            .await
            .unwrap();
        store
            .approve(created.id, WorkSchedule::default())
            .await
            .unwrap();

        let revoked = store.revoke(created.id).await.unwrap();
        assert!(!revoked.is_approved);
        assert!(store.list_approved().await.unwrap().is_empty());
        // The account itself survives revocation.
        assert!(store.find_by_id(created.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_removes_account() {
        let store = InMemoryStore::new();
        let created = store
            .insert(NewEmployee {
                telegram_id: 42,
                username: None,
                full_name: None,
                is_admin: false,
            })
            .await
            .unwrap();

        store.delete(created.id).await.unwrap();
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete(created.id).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_approve_missing_employee_is_not_found() {
        let store = InMemoryStore::new();
        let result = store
            .approve(Uuid::new_v4(), WorkSchedule::default())
            .await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }
}
