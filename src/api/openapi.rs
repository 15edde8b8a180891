//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshop API",
        version = "0.1.0",
        description = "Book catalog and customer registration REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book_by_isbn,
        books::get_books_by_author,
        books::get_books_by_title,
        books::get_book_reviews,
        books::list_books_async,
        books::get_book_by_isbn_async,
        books::get_books_by_author_async,
        books::get_books_by_title_async,
        // Users
        users::register,
        users::login,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::user::Credentials,
            crate::api::MessageResponse,
            health::HealthResponse,
            health::ReadinessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog lookups"),
        (name = "users", description = "Customer registration")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
