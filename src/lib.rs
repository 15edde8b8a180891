//! Bookshop catalog server
//!
//! A small REST JSON API serving an in-memory book catalog, with lookups by
//! ISBN, author and title, book reviews, and customer self-registration.

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

impl AppState {
    /// Wire services over `repository` using the catalog settings of `config`
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, &config.catalog);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
