//! Employee repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use domain::models::{Employee, NewEmployee, WorkSchedule};
use domain::stores::{EmployeeStore, StoreError};

use super::map_sqlx_error;
use crate::entities::EmployeeEntity;

/// PostgreSQL-backed employee accounts.
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn insert(&self, employee: NewEmployee) -> Result<Employee, StoreError> {
        let schedule = WorkSchedule::default();
        let entity = sqlx::query_as::<_, EmployeeEntity>(
            r#"
            INSERT INTO employees (telegram_id, username, full_name, is_approved, is_admin,
                                   work_start_hour, work_end_hour)
            VALUES ($1, $2, $3, $4, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(employee.telegram_id)
        .bind(&employee.username)
        .bind(&employee.full_name)
        // Admin accounts skip the approval queue.
        .bind(employee.is_admin)
        .bind(i16::from(schedule.start_hour))
        .bind(i16::from(schedule.end_hour))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, StoreError> {
        let entity = sqlx::query_as::<_, EmployeeEntity>(
            "SELECT * FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(Into::into))
    }

    async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<Employee>, StoreError> {
        let entity = sqlx::query_as::<_, EmployeeEntity>(
            "SELECT * FROM employees WHERE telegram_id = $1",
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let entities = sqlx::query_as::<_, EmployeeEntity>(
            "SELECT * FROM employees ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn list_approved(&self) -> Result<Vec<Employee>, StoreError> {
        let entities = sqlx::query_as::<_, EmployeeEntity>(
            r#"
            SELECT * FROM employees
            WHERE is_approved AND NOT is_admin
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn approve(&self, id: Uuid, schedule: WorkSchedule) -> Result<Employee, StoreError> {
        let entity = sqlx::query_as::<_, EmployeeEntity>(
            r#"
            UPDATE employees
            SET is_approved = TRUE, work_start_hour = $2, work_end_hour = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(i16::from(schedule.start_hour))
        .bind(i16::from(schedule.end_hour))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(StoreError::NotFound)?;

        Ok(entity.into())
    }

    async fn revoke(&self, id: Uuid) -> Result<Employee, StoreError> {
        let entity = sqlx::query_as::<_, EmployeeEntity>(
            r#"
            UPDATE employees
            SET is_approved = FALSE
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(StoreError::NotFound)?;

        Ok(entity.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn update_schedule(
        &self,
        id: Uuid,
        schedule: WorkSchedule,
    ) -> Result<Employee, StoreError> {
        let entity = sqlx::query_as::<_, EmployeeEntity>(
            r#"
            UPDATE employees
            SET work_start_hour = $2, work_end_hour = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(i16::from(schedule.start_hour))
        .bind(i16::from(schedule.end_hour))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(StoreError::NotFound)?;

        Ok(entity.into())
    }
}
