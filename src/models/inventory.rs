//! Inventory item (catalog entry) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Inventory item row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryItem {
    pub id: i32,
    pub item_code: String,
    pub name: String,
    pub category_id: i32,
    pub price: i32,
    pub status: String,
    #[serde(skip)]
    pub picture: Option<Vec<u8>>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inventory item with resolved references for list/detail views
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryItemDetails {
    pub id: i32,
    pub item_code: String,
    pub name: String,
    pub category_id: i32,
    pub category_name: String,
    pub price: i32,
    pub status: String,
    /// Base64-encoded picture, if any
    pub picture: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create inventory item request. Creator and updater are employee codes,
/// the category is referenced by name (kiosk admin screens work with names).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItem {
    #[validate(length(min = 1))]
    pub item_code: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category_name: String,
    #[serde(default)]
    pub price: i32,
    pub status: Option<String>,
    /// Base64-encoded image
    pub picture: Option<String>,
    #[validate(length(min = 1))]
    pub created_by: String,
    #[validate(length(min = 1))]
    pub updated_by: String,
}

/// Partial update request; only provided fields are written
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub category_id: Option<i32>,
    pub price: Option<i32>,
    pub status: Option<String>,
    /// Base64-encoded image
    pub picture: Option<String>,
    pub updated_by: Option<String>,
}

/// Bulk item load request: one catalog row per item code
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoadItems {
    #[validate(length(min = 1))]
    pub item_codes: Vec<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category_name: String,
    #[serde(default)]
    pub price: i32,
    pub status: Option<String>,
    #[validate(length(min = 1))]
    pub created_by: String,
    #[validate(length(min = 1))]
    pub updated_by: String,
}

/// One kiosk product tile: a product name with an available unit count left
/// implicit (any Active unit not currently checked out)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UniqueProduct {
    pub product_name: String,
    pub category_id: i32,
    pub price: i32,
    /// Base64-encoded category image
    pub product_image: Option<String>,
}

/// One product of a category for kiosk browse screens
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryProduct {
    pub product_id: i32,
    pub item_code: String,
    pub product_name: String,
    pub price: i32,
    /// Base64-encoded product image
    pub product_image: Option<String>,
}
