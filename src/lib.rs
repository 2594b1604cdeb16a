//! Librario - Book Catalog and Lending Server
//!
//! A REST JSON API for a book-lending catalog: list and search books,
//! add and update them, and borrow or return copies under a cookie-based
//! login token.

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
