//! Employee entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{Employee, WorkSchedule};

/// Database row mapping for the employees table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeEntity {
    pub id: Uuid,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub is_approved: bool,
    pub is_admin: bool,
    pub work_start_hour: i16,
    pub work_end_hour: i16,
    pub created_at: DateTime<Utc>,
}

impl From<EmployeeEntity> for Employee {
    fn from(entity: EmployeeEntity) -> Self {
        Self {
            id: entity.id,
            telegram_id: entity.telegram_id,
            username: entity.username,
            full_name: entity.full_name,
            is_approved: entity.is_approved,
            is_admin: entity.is_admin,
            // Hours are constrained by the schema; the cast cannot truncate.
            schedule: WorkSchedule {
                start_hour: entity.work_start_hour as u8,
                end_hour: entity.work_end_hour as u8,
            },
            created_at: entity.created_at,
        }
    }
}
