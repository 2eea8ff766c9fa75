//! Kiosk Inventory Management Server
//!
//! A Rust REST backend for self-service inventory kiosks: employees check
//! out and return physical items (with damage and loss tracking) against a
//! PostgreSQL-backed catalog and its checkout, unreturned and damaged ledgers.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
