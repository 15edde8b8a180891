//! User model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

const CREDENTIALS_REQUIRED: &str = "Username and password are required";

/// Registered customer. The password is kept verbatim and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Username/password pair sent to `/register` and `/login`
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct Credentials {
    #[validate(
        required(message = "Username and password are required"),
        length(min = 1, message = "Username and password are required")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "Username and password are required"),
        length(min = 1, message = "Username and password are required")
    )]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Validate and split into `(username, password)`
    pub fn into_parts(self) -> Result<(String, String), &'static str> {
        if self.validate().is_err() {
            return Err(CREDENTIALS_REQUIRED);
        }
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(CREDENTIALS_REQUIRED),
        }
    }
}

impl From<(String, String)> for User {
    fn from((username, password): (String, String)) -> Self {
        Self { username, password }
    }
}
