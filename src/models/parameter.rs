//! Machine parameter model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Parameter row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Parameter {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub value: String,
    pub status: String,
    pub machine_id: Option<i32>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create parameter request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateParameter {
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub value: String,
    pub status: Option<String>,
    pub machine_id: Option<i32>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

/// Partial update request; only provided fields are written
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParameter {
    pub category: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub status: Option<String>,
    pub machine_id: Option<i32>,
    pub updated_by: Option<i32>,
}
