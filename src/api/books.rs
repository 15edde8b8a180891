//! Catalog endpoints
//!
//! The `/async` routes answer with the same payloads as their synchronous
//! counterparts after the configured catalog delay.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookMap, Reviews},
    AppState,
};

/// List the whole catalog
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    responses(
        (status = 200, description = "Catalog keyed by ISBN", body = std::collections::HashMap<String, Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<BookMap> {
    Json(state.services.catalog.get_all())
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/isbn/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_by_isbn(&isbn)?;
    Ok(Json(book))
}

/// Get books by author (case-insensitive exact match)
#[utoipa::path(
    get,
    path = "/author/{author}",
    tag = "books",
    params(("author" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Matching books keyed by ISBN", body = std::collections::HashMap<String, Book>),
        (status = 404, description = "No books found by this author", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> AppResult<Json<BookMap>> {
    let books = state.services.catalog.get_by_author(&author)?;
    Ok(Json(books))
}

/// Get books by title (case-insensitive substring match)
#[utoipa::path(
    get,
    path = "/title/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Title or part of it")),
    responses(
        (status = 200, description = "Matching books keyed by ISBN", body = std::collections::HashMap<String, Book>),
        (status = 404, description = "No books found with this title", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<BookMap>> {
    let books = state.services.catalog.get_by_title(&title)?;
    Ok(Json(books))
}

/// Get the reviews of a book
#[utoipa::path(
    get,
    path = "/review/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Reviews keyed by reviewer", body = std::collections::HashMap<String, String>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Reviews>> {
    let reviews = state.services.catalog.get_reviews(&isbn)?;
    Ok(Json(reviews))
}

/// List the whole catalog after the catalog delay
#[utoipa::path(
    get,
    path = "/async",
    tag = "books",
    responses(
        (status = 200, description = "Catalog keyed by ISBN", body = std::collections::HashMap<String, Book>),
        (status = 500, description = "Error fetching books", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_async(State(state): State<AppState>) -> AppResult<Json<BookMap>> {
    let books = state
        .services
        .catalog
        .get_all_delayed()
        .await
        .map_err(|e| {
            tracing::warn!("Delayed catalog listing failed: {}", e);
            AppError::Internal("Error fetching books".to_string())
        })?;
    Ok(Json(books))
}

/// Get a book by ISBN after the catalog delay
#[utoipa::path(
    get,
    path = "/async/isbn/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_by_isbn_async(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_by_isbn_delayed(&isbn).await?;
    Ok(Json(book))
}

/// Get books by author after the catalog delay
#[utoipa::path(
    get,
    path = "/async/author/{author}",
    tag = "books",
    params(("author" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Matching books keyed by ISBN", body = std::collections::HashMap<String, Book>),
        (status = 404, description = "No books found by this author", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_books_by_author_async(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> AppResult<Json<BookMap>> {
    let books = state.services.catalog.get_by_author_delayed(&author).await?;
    Ok(Json(books))
}

/// Get books by title after the catalog delay
#[utoipa::path(
    get,
    path = "/async/title/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Title or part of it")),
    responses(
        (status = 200, description = "Matching books keyed by ISBN", body = std::collections::HashMap<String, Book>),
        (status = 404, description = "No books found with this title", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_books_by_title_async(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<BookMap>> {
    let books = state.services.catalog.get_by_title_delayed(&title).await?;
    Ok(Json(books))
}
