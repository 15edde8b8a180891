//! Customer registration and login service

use crate::{
    error::{AppError, AppResult},
    models::user::{Credentials, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new customer. Both fields must be non-empty and the
    /// username must not be taken. The password is stored as given.
    pub async fn register(&self, credentials: Credentials) -> AppResult<User> {
        let (username, password) = credentials
            .into_parts()
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let user = User::from((username, password));
        self.repository.users.insert(user.clone()).await?;

        tracing::info!("Registered user {}", user.username);
        Ok(user)
    }

    /// Check plaintext credentials against the registry
    pub async fn authenticate(&self, credentials: Credentials) -> AppResult<User> {
        let (username, password) = credentials
            .into_parts()
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        match self.repository.users.find_by_credentials(&username, &password).await {
            Some(user) => Ok(user),
            None => {
                tracing::debug!("Rejected login for {}", username);
                Err(AppError::Authentication(
                    "Invalid login. Check username and password".to_string(),
                ))
            }
        }
    }

    /// Whether the username is already registered
    pub async fn is_valid(&self, username: &str) -> bool {
        self.repository.users.exists(username).await
    }

    pub async fn count(&self) -> usize {
        self.repository.users.count().await
    }
}
