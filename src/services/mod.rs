//! Business logic services

pub mod catalog;
pub mod users;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog_config: &CatalogConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone(), catalog_config.async_delay()),
            users: users::UsersService::new(repository),
        }
    }
}
