//! Repository layer over the in-memory stores

pub mod books;
pub mod users;

use crate::{config::CatalogConfig, error::AppResult};

/// Main repository struct holding the catalog and the user registry
#[derive(Clone, Debug)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a repository over the given catalog with an empty registry
    pub fn new(books: books::BooksRepository) -> Self {
        Self {
            books,
            users: users::UsersRepository::new(),
        }
    }

    /// Load the catalog named by the configuration, or the built-in one
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        let books = match &config.books_file {
            Some(path) => books::BooksRepository::load(path)?,
            None => books::BooksRepository::seed()?,
        };
        Ok(Self::new(books))
    }
}
