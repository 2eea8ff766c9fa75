//! Employee (kiosk user directory) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Employee row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: Option<String>,
    pub emp_code: String,
    pub role_id: Option<i32>,
    pub status: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1))]
    pub firstname: String,
    #[validate(length(min = 1))]
    pub lastname: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub emp_code: String,
    pub role_id: i32,
    pub status: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// Partial update request; only provided fields are written
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployee {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub emp_code: Option<String>,
    pub role_id: Option<i32>,
    pub status: Option<String>,
    pub updated_by: Option<String>,
}

/// Kiosk action lookup request
#[derive(Debug, Deserialize, ToSchema)]
pub struct EmployeeActionsRequest {
    pub emp_code: String,
}

/// Name, role and permitted kiosk actions for an employee
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeActions {
    pub emp_code: String,
    pub name: String,
    pub role: String,
    pub actions: Vec<String>,
}
