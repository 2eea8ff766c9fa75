//! Location model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Location row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create location request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocation {
    #[validate(length(min = 1))]
    pub name: String,
    pub status: Option<String>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

/// Partial update request; only provided fields are written
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub status: Option<String>,
    pub updated_by: Option<i32>,
}
