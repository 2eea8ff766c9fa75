//! Category model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Category row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub status: String,
    #[serde(skip)]
    pub picture: Option<Vec<u8>>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category as shown on kiosk browse screens
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryView {
    pub category_id: i32,
    pub category_name: String,
    /// Base64-encoded image
    pub category_image: Option<String>,
}

/// Create category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 1))]
    pub name: String,
    pub status: Option<String>,
    /// Base64-encoded image
    pub picture: Option<String>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

/// Partial update request; only provided fields are written
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub status: Option<String>,
    /// Base64-encoded image
    pub picture: Option<String>,
    pub updated_by: Option<i32>,
}
