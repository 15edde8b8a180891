//! In-memory user registry

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

/// Registered users in registration order
#[derive(Clone, Debug, Default)]
pub struct UsersRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl UsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user with this exact username exists
    pub async fn exists(&self, username: &str) -> bool {
        self.users.read().await.iter().any(|u| u.username == username)
    }

    /// Append a user; fails if the username is already taken.
    /// The check and the append happen under the same write lock.
    pub async fn insert(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        users.push(user);
        Ok(())
    }

    /// Plaintext credential match
    pub async fn find_by_credentials(&self, username: &str, password: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
