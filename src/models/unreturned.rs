//! Unreturned (loss) ledger model.
//!
//! Rows are created by an external escalation process when a return deadline
//! is missed; the checkout workflow only consults them as a gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Unreturned listing row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UnreturnedListing {
    pub id: i32,
    pub listing_id: i32,
    pub employee_id: i32,
    pub status: String,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create unreturned listing request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUnreturnedListing {
    pub listing_id: i32,
    pub employee_id: i32,
    pub status: Option<String>,
    pub created_by: Option<i32>,
}

/// Update request keyed by the referenced checkout listing
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUnreturnedListing {
    pub status: Option<String>,
    pub updated_by: Option<i32>,
}
