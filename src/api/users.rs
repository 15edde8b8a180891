//! Customer registration and login endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::user::Credentials, AppState};

use super::{JsonBody, MessageResponse};

/// Register a new customer
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = Credentials,
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing fields or username already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> AppResult<Json<MessageResponse>> {
    state.services.users.register(credentials).await?;
    Ok(Json(MessageResponse::new("User successfully registered")))
}

/// Check customer credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = Credentials,
    responses(
        (status = 200, description = "Credentials accepted", body = MessageResponse),
        (status = 400, description = "Missing fields", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> AppResult<Json<MessageResponse>> {
    let user = state.services.users.authenticate(credentials).await?;
    tracing::info!("User {} logged in", user.username);
    Ok(Json(MessageResponse::new("User successfully logged in")))
}
