//! API handlers for the kiosk REST endpoints

pub mod catalog;
pub mod checkout;
pub mod email;
pub mod employees;
pub mod health;
pub mod inventory;
pub mod listings;
pub mod locations;
pub mod machines;
pub mod openapi;
pub mod parameters;
pub mod roles;

use serde::Serialize;
use utoipa::ToSchema;

/// Plain status message body used by most mutating endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by create endpoints
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}
