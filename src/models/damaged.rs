//! Damaged (inspection) ledger model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Damaged listing row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DamagedListing {
    pub id: i32,
    pub listing_id: i32,
    pub status: String,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create damaged listing request (ledger administration; damaged returns
/// insert rows through the workflow instead)
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDamagedListing {
    pub listing_id: i32,
    pub created_by: Option<i32>,
}

/// Status update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDamagedListing {
    pub status: String,
    pub updated_by: Option<i32>,
}
