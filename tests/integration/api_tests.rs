//! API integration tests, driven through the router in-process

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use bookshop_server::{
    api::create_router,
    config::{AppConfig, CatalogConfig},
    repository::Repository,
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router over the built-in catalog with no async delay
fn test_app() -> Router {
    let config = AppConfig {
        catalog: CatalogConfig {
            books_file: None,
            async_delay_ms: 0,
        },
        ..AppConfig::default()
    };
    let repository = Repository::from_config(&config.catalog).expect("Failed to load catalog");
    create_router(AppState::new(config, repository))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("Failed to send request");
    read(response).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("Failed to send request");
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_store_sizes() {
    let app = test_app();
    let (status, body) = get(&app, "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["books"], 10);
    assert_eq!(body["users"], 0);
}

#[tokio::test]
async fn test_list_books() {
    let app = test_app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let books = body.as_object().expect("Catalog is not an object");
    assert_eq!(books.len(), 10);
    assert_eq!(body["8"]["title"], "Pride and Prejudice");
}

#[tokio::test]
async fn test_get_book_by_isbn() {
    let app = test_app();
    let (status, body) = get(&app, "/isbn/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"title": "Things Fall Apart", "author": "Chinua Achebe", "reviews": {}})
    );
}

#[tokio::test]
async fn test_get_book_by_unknown_isbn() {
    let app = test_app();
    let (status, body) = get(&app, "/isbn/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_author_lookup_is_case_insensitive() {
    let app = test_app();
    let (status, mixed) = get(&app, "/author/Jane%20Austen").await;
    assert_eq!(status, StatusCode::OK);

    let (status, upper) = get(&app, "/author/JANE%20AUSTEN").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mixed, upper);
    assert_eq!(mixed["8"]["author"], "Jane Austen");
}

#[tokio::test]
async fn test_unknown_author() {
    let app = test_app();
    let (status, body) = get(&app, "/author/Nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No books found by this author");
}

#[tokio::test]
async fn test_title_substring_lookup() {
    let app = test_app();
    let (status, body) = get(&app, "/title/pride").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert_eq!(body["8"]["title"], "Pride and Prejudice");

    let (status, body) = get(&app, "/title/nothing-like-this").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No books found with this title");
}

#[tokio::test]
async fn test_reviews() {
    let app = test_app();
    let (status, body) = get(&app, "/review/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = get(&app, "/review/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_async_routes_match_synchronous_routes() {
    let app = test_app();
    for (sync_uri, async_uri) in [
        ("/", "/async"),
        ("/isbn/2", "/async/isbn/2"),
        ("/author/unknown", "/async/author/unknown"),
        ("/title/the", "/async/title/the"),
        ("/isbn/999", "/async/isbn/999"),
        ("/author/Nobody", "/async/author/Nobody"),
        ("/title/zzz", "/async/title/zzz"),
    ] {
        let expected = get(&app, sync_uri).await;
        let actual = get(&app, async_uri).await;
        assert_eq!(actual, expected, "{} vs {}", sync_uri, async_uri);
    }
}

#[tokio::test]
async fn test_register_twice() {
    let app = test_app();
    let credentials = json!({"username": "reader", "password": "secret"});

    let (status, body) = post_json(&app, "/register", credentials.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User successfully registered");

    let (status, body) = post_json(&app, "/register", credentials).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn test_register_requires_both_fields() {
    let app = test_app();
    for body in [
        json!({"username": "reader", "password": ""}),
        json!({"username": "", "password": "secret"}),
        json!({"username": "reader"}),
        json!({}),
    ] {
        let (status, response) = post_json(&app, "/register", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], "Username and password are required");
    }

    let (_, ready) = get(&app, "/ready").await;
    assert_eq!(ready["users"], 0);
}

#[tokio::test]
async fn test_register_rejects_malformed_body() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .expect("Failed to send request");

    let (status, body) = read(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_login_after_registration() {
    let app = test_app();
    let credentials = json!({"username": "reader", "password": "secret"});
    post_json(&app, "/register", credentials.clone()).await;

    let (status, body) = post_json(&app, "/login", credentials).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User successfully logged in");

    let (status, _) = post_json(
        &app,
        "/login",
        json!({"username": "reader", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = test_app();
    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Bookshop API");
}
