//! Employee administration endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    ApproveEmployeeRequest, EmployeeResponse, UpdateScheduleRequest, WorkSchedule,
};

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// When true, only accounts awaiting approval are returned.
    #[serde(default)]
    pub pending: bool,
}

/// List employee accounts.
///
/// GET /api/v1/admin/employees?pending=
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = state.employees.list_all().await?;
    let responses: Vec<EmployeeResponse> = employees
        .into_iter()
        .filter(|e| !query.pending || !e.is_approved)
        .map(EmployeeResponse::from)
        .collect();
    Ok(Json(responses))
}

/// Approve a pending employee and assign a work schedule.
///
/// POST /api/v1/admin/employees/:employee_id/approve
pub async fn approve_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(request): Json<ApproveEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    request.validate()?;

    let schedule = WorkSchedule::new(request.start_hour, request.end_hour)?;
    let employee = state.employees.approve(employee_id, schedule).await?;

    info!(
        %employee_id,
        start_hour = request.start_hour,
        end_hour = request.end_hour,
        "Employee approved"
    );

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Fetch one employee account.
///
/// GET /api/v1/admin/employees/:employee_id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state
        .employees
        .find_by_id(employee_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".into()))?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// Reject a registration, deleting the account.
///
/// POST /api/v1/admin/employees/:employee_id/reject
pub async fn reject_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete(employee_id).await?;

    info!(%employee_id, "Employee registration rejected");

    Ok(StatusCode::NO_CONTENT)
}

/// Withdraw approval from an active employee.
///
/// Admin accounts cannot be revoked.
///
/// POST /api/v1/admin/employees/:employee_id/revoke
pub async fn revoke_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = state
        .employees
        .find_by_id(employee_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employee not found".into()))?;
    if employee.is_admin {
        return Err(ApiError::Validation(
            "Cannot revoke an admin account".into(),
        ));
    }

    let employee = state.employees.revoke(employee_id).await?;

    info!(%employee_id, "Employee approval revoked");

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Change an employee's work schedule.
///
/// PUT /api/v1/admin/employees/:employee_id/schedule
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(request): Json<UpdateScheduleRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    request.validate()?;

    let schedule = WorkSchedule::new(request.start_hour, request.end_hour)?;
    let employee = state
        .employees
        .update_schedule(employee_id, schedule)
        .await?;

    info!(
        %employee_id,
        start_hour = request.start_hour,
        end_hour = request.end_hour,
        "Employee schedule updated"
    );

    Ok(Json(EmployeeResponse::from(employee)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use domain::models::NewEmployee;
    use domain::stores::{EmployeeStore, InMemoryStore};
    use shared::jwt::JwtKeys;

    use crate::config::{
        Config, DatabaseConfig, JwtConfig, LoggingConfig, SecurityConfig, ServerConfig,
        StorageBackend, StorageConfig,
    };

    fn test_state() -> (AppState, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
                request_timeout_secs: 5,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
            },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 1,
                min_connections: 1,
                connect_timeout_secs: 1,
                idle_timeout_secs: 1,
            },
            logging: LoggingConfig {
                level: "info".into(),
                format: "pretty".into(),
            },
            jwt: JwtConfig {
                secret: "test-secret".into(),
                token_expiry_secs: 3600,
            },
            security: SecurityConfig {
                cors_origins: vec![],
                admin_telegram_ids: vec![],
            },
        };
        let state = AppState {
            pings: store.clone(),
            settings: store.clone(),
            employees: store.clone(),
            jwt: Arc::new(JwtKeys::new("test-secret", 3600)),
            config: Arc::new(config),
        };
        (state, store)
    }

    async fn register(store: &InMemoryStore, telegram_id: i64, is_admin: bool) -> Uuid {
        store
            .insert(NewEmployee {
                telegram_id,
                username: None,
                full_name: None,
                is_admin,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_reject_deletes_pending_account() {
        let (state, store) = test_state();
        let id = register(&store, 1, false).await;

        let status = reject_employee(State(state), Path(id)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(store.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reject_unknown_account_is_not_found() {
        let (state, _store) = test_state();
        let result = reject_employee(State(state), Path(Uuid::new_v4())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_revoke_unapproves_employee() {
        let (state, store) = test_state();
        let id = register(&store, 1, false).await;
        store.approve(id, WorkSchedule::default()).await.unwrap();

        let Json(response) = revoke_employee(State(state), Path(id)).await.unwrap();
        assert!(!response.is_approved);
        // The account survives and can be approved again later.
        assert!(store.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_revoke_refuses_admin_account() {
        let (state, store) = test_state();
        let id = register(&store, 1, true).await;

        let result = revoke_employee(State(state), Path(id)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        // Still approved.
        assert!(store.find_by_id(id).await.unwrap().unwrap().is_approved);
    }

    #[tokio::test]
    async fn test_get_employee() {
        let (state, store) = test_state();
        let id = register(&store, 7, false).await;

        let Json(response) = get_employee(State(state.clone()), Path(id)).await.unwrap();
        assert_eq!(response.id, id);
        assert_eq!(response.telegram_id, 7);

        let missing = get_employee(State(state), Path(Uuid::new_v4())).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
    }
}
