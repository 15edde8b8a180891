//! Data models for the bookshop

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookMap, Reviews};
pub use user::{Credentials, User};
