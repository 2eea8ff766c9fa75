//! Outgoing SMTP account model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// SMTP account row
#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct EmailAccount {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub server: String,
    pub port: i32,
    pub smtp_format: Option<String>,
    pub status: String,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// SMTP account as returned by the API; the password never leaves the server
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmailAccountView {
    pub id: i32,
    pub username: String,
    pub server: String,
    pub port: i32,
    pub smtp_format: Option<String>,
    pub status: String,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmailAccount> for EmailAccountView {
    fn from(a: EmailAccount) -> Self {
        Self {
            id: a.id,
            username: a.username,
            server: a.server,
            port: a.port,
            smtp_format: a.smtp_format,
            status: a.status,
            created_by: a.created_by,
            updated_by: a.updated_by,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Create SMTP account request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmailAccount {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub server: String,
    pub port: i32,
    pub smtp_format: Option<String>,
    pub status: Option<String>,
    pub created_by: Option<i32>,
}

/// Partial update request; only provided fields are written
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmailAccount {
    pub username: Option<String>,
    pub password: Option<String>,
    pub server: Option<String>,
    pub port: Option<i32>,
    pub smtp_format: Option<String>,
    pub status: Option<String>,
    pub updated_by: Option<i32>,
}
