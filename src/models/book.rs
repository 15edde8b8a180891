//! Book model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reviews keyed by reviewer username
pub type Reviews = IndexMap<String, String>;

/// Books keyed by ISBN, in catalog order
pub type BookMap = IndexMap<String, Book>;

/// Catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Review text keyed by reviewer
    #[serde(default)]
    #[schema(value_type = std::collections::HashMap<String, String>)]
    pub reviews: Reviews,
}

impl Book {
    /// Case-insensitive exact comparison against the author name
    pub fn is_by(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }

    /// Case-insensitive substring search in the title
    pub fn title_contains(&self, fragment: &str) -> bool {
        self.title.to_lowercase().contains(&fragment.to_lowercase())
    }
}
