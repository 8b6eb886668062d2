//! Employee domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::schedule::WorkSchedule;

/// An employee account, keyed by Telegram identity.
///
/// New accounts start unapproved; an admin approves them together with a
/// work schedule before any report is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub is_approved: bool,
    pub is_admin: bool,
    pub schedule: WorkSchedule,
    pub created_at: DateTime<Utc>,
}

/// A new account about to be registered.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

/// Request payload for Telegram-identity login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub telegram_id: i64,

    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 128, message = "Full name must be at most 128 characters"))]
    pub full_name: Option<String>,
}

/// Request payload for approving a pending employee.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApproveEmployeeRequest {
    #[serde(default = "default_start_hour")]
    #[validate(custom(function = "shared::validation::validate_work_hour"))]
    pub start_hour: u8,

    #[serde(default = "default_end_hour")]
    #[validate(custom(function = "shared::validation::validate_work_hour"))]
    pub end_hour: u8,
}

/// Request payload for updating an employee's work schedule.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    #[validate(custom(function = "shared::validation::validate_work_hour"))]
    pub start_hour: u8,

    #[validate(custom(function = "shared::validation::validate_work_hour"))]
    pub end_hour: u8,
}

fn default_start_hour() -> u8 {
    9
}

fn default_end_hour() -> u8 {
    18
}

/// Response payload for employee data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub is_approved: bool,
    pub is_admin: bool,
    pub work_start_hour: u8,
    pub work_end_hour: u8,
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            telegram_id: e.telegram_id,
            username: e.username,
            full_name: e.full_name,
            is_approved: e.is_approved,
            is_admin: e.is_admin,
            work_start_hour: e.schedule.start_hour,
            work_end_hour: e.schedule.end_hour,
            created_at: e.created_at,
        }
    }
}

/// Response payload for a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: EmployeeResponse,
}
