//! API handlers for the bookshop REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// Plain `{message}` response body
#[derive(Debug, Serialize, ToSchema)]
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

/// JSON body extractor whose rejections surface as 400 validation errors
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/", get(books::list_books))
        .route("/isbn/:isbn", get(books::get_book_by_isbn))
        .route("/author/:author", get(books::get_books_by_author))
        .route("/title/:title", get(books::get_books_by_title))
        .route("/review/:isbn", get(books::get_book_reviews))
        // Catalog, delayed
        .route("/async", get(books::list_books_async))
        .route("/async/isbn/:isbn", get(books::get_book_by_isbn_async))
        .route("/async/author/:author", get(books::get_books_by_author_async))
        .route("/async/title/:title", get(books::get_books_by_title_async))
        // Customers
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
