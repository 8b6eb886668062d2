//! Authentication endpoint handlers.

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use domain::models::{EmployeeResponse, LoginRequest, NewEmployee, TokenResponse};
use shared::jwt::Role;

use crate::app::AppState;
use crate::error::ApiError;

/// Login with a Telegram identity, registering the account on first contact.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    request.validate()?;

    let existing = state
        .employees
        .find_by_telegram_id(request.telegram_id)
        .await?;

    let employee = match existing {
        Some(employee) => employee,
        None => {
            let is_admin = state
                .config
                .security
                .admin_telegram_ids
                .contains(&request.telegram_id);
            let employee = state
                .employees
                .insert(NewEmployee {
                    telegram_id: request.telegram_id,
                    username: request.username.clone(),
                    full_name: request.full_name.clone(),
                    is_admin,
                })
                .await?;
            info!(
                employee_id = %employee.id,
                is_admin,
                "Registered new employee account"
            );
            employee
        }
    };

    if !employee.is_approved {
        return Err(ApiError::Forbidden(
            "Account is pending admin approval".into(),
        ));
    }

    let role = if employee.is_admin {
        Role::Admin
    } else {
        Role::Employee
    };
    let access_token = state.jwt.issue(employee.id, role)?;

    info!(employee_id = %employee.id, "Employee logged in");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        user: EmployeeResponse::from(employee),
    }))
}
