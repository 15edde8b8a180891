//! Catalog query service

use std::time::Duration;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookMap, Reviews},
    repository::Repository,
};

const BOOK_NOT_FOUND: &str = "Book not found";
const NO_BOOKS_BY_AUTHOR: &str = "No books found by this author";
const NO_BOOKS_WITH_TITLE: &str = "No books found with this title";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    async_delay: Duration,
}

impl CatalogService {
    pub fn new(repository: Repository, async_delay: Duration) -> Self {
        Self {
            repository,
            async_delay,
        }
    }

    /// Full catalog
    pub fn get_all(&self) -> BookMap {
        self.repository.books.all().clone()
    }

    /// Book with exactly this ISBN
    pub fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.repository
            .books
            .get(isbn)
            .cloned()
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Books whose author equals `author`, ignoring case
    pub fn get_by_author(&self, author: &str) -> AppResult<BookMap> {
        let books = self.repository.books.filter(|book| book.is_by(author));
        non_empty(books, NO_BOOKS_BY_AUTHOR)
    }

    /// Books whose title contains `title`, ignoring case
    pub fn get_by_title(&self, title: &str) -> AppResult<BookMap> {
        let books = self.repository.books.filter(|book| book.title_contains(title));
        non_empty(books, NO_BOOKS_WITH_TITLE)
    }

    /// Reviews of the book with this ISBN
    pub fn get_reviews(&self, isbn: &str) -> AppResult<Reviews> {
        self.get_by_isbn(isbn).map(|book| book.reviews)
    }

    // Delayed variants behind the `/async` routes. They wait on the runtime
    // timer, then resolve with the synchronous result.

    pub async fn get_all_delayed(&self) -> AppResult<BookMap> {
        self.delay().await;
        Ok(self.get_all())
    }

    pub async fn get_by_isbn_delayed(&self, isbn: &str) -> AppResult<Book> {
        self.delay().await;
        self.get_by_isbn(isbn)
    }

    pub async fn get_by_author_delayed(&self, author: &str) -> AppResult<BookMap> {
        self.delay().await;
        self.get_by_author(author)
    }

    pub async fn get_by_title_delayed(&self, title: &str) -> AppResult<BookMap> {
        self.delay().await;
        self.get_by_title(title)
    }

    /// Number of books in the catalog
    pub fn count(&self) -> usize {
        self.repository.books.len()
    }

    async fn delay(&self) {
        if !self.async_delay.is_zero() {
            tokio::time::sleep(self.async_delay).await;
        }
    }
}

fn non_empty(books: BookMap, message: &str) -> AppResult<BookMap> {
    if books.is_empty() {
        Err(AppError::NotFound(message.to_string()))
    } else {
        Ok(books)
    }
}
