//! Checkout listing (ledger) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// One checkout/return lifecycle instance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckoutListing {
    pub id: i32,
    pub inventory_id: i32,
    pub employee_id: i32,
    pub status: String,
    pub reason: Option<String>,
    pub is_damaged: bool,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create listing request (ledger administration; the kiosk checkout path
/// writes listings through the workflow instead)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateListing {
    pub inventory_id: i32,
    pub employee_id: i32,
    pub status: Option<String>,
    #[validate(length(min = 1))]
    pub reason: String,
    #[serde(default)]
    pub is_damaged: bool,
    pub created_by: Option<i32>,
}

/// Partial update request; only provided fields are written
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateListing {
    pub status: Option<String>,
    pub reason: Option<String>,
    pub is_damaged: Option<bool>,
    pub updated_by: Option<i32>,
}

/// A product currently held by an employee, as shown on the return screens
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HeldProduct {
    pub item_code: String,
    pub product_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub price: i32,
    /// Base64-encoded product image
    pub product_image: Option<String>,
    pub product_taken_date: DateTime<Utc>,
    pub product_return_date: DateTime<Utc>,
    /// Whole hours since checkout, computed as (now - checkout time)
    pub hours_held: i64,
}
