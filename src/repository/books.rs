//! In-memory catalog store

use std::{fs, path::Path, sync::Arc};

use serde::{de, Deserialize, Deserializer};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookMap},
};

/// Catalog shipped with the server, used when no books file is configured
const SEED_CATALOG: &str = include_str!("../../config/books.json");

/// Read-only ISBN -> book mapping, loaded once at startup
#[derive(Clone, Debug)]
pub struct BooksRepository {
    books: Arc<BookMap>,
}

impl BooksRepository {
    pub fn new(books: BookMap) -> Self {
        Self {
            books: Arc::new(books),
        }
    }

    /// Built-in catalog
    pub fn seed() -> AppResult<Self> {
        Self::from_json(SEED_CATALOG)
    }

    /// Load the catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::Catalog(format!("Cannot read {}: {}", path.display(), e)))?;
        let repository = Self::from_json(&raw)?;
        tracing::info!("Loaded {} books from {}", repository.len(), path.display());
        Ok(repository)
    }

    /// Parse a JSON object of ISBN -> book. Duplicate ISBNs are rejected.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let UniqueBooks(books) = serde_json::from_str(raw)
            .map_err(|e| AppError::Catalog(format!("Invalid catalog: {}", e)))?;
        Ok(Self::new(books))
    }

    pub fn all(&self) -> &BookMap {
        &self.books
    }

    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Books matching `predicate`, keeping catalog order
    pub fn filter<F>(&self, predicate: F) -> BookMap
    where
        F: Fn(&Book) -> bool,
    {
        self.books
            .iter()
            .filter(|(_, book)| predicate(book))
            .map(|(isbn, book)| (isbn.clone(), book.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Map deserializer that fails on a repeated key instead of keeping the last value
struct UniqueBooks(BookMap);

impl<'de> Deserialize<'de> for UniqueBooks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = UniqueBooks;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an object mapping ISBN to book")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut books = BookMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((isbn, book)) = access.next_entry::<String, Book>()? {
                    if books.contains_key(&isbn) {
                        return Err(de::Error::custom(format!("duplicate ISBN {}", isbn)));
                    }
                    books.insert(isbn, book);
                }
                Ok(UniqueBooks(books))
            }
        }

        deserializer.deserialize_map(Visitor)
    }
}
