//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;

pub use books::BooksRepository;

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

/// Persistence operations on book records.
///
/// Lookups that find no row return `Ok(None)` rather than an error; callers
/// decide whether absence is a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Create the `books` table if it does not exist yet
    async fn ensure_schema(&self) -> AppResult<()>;

    /// Round trip to the database, used by the readiness probe
    async fn ping(&self) -> AppResult<()>;

    async fn create(&self, book: &NewBook) -> AppResult<Book>;

    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Replace title and status of an existing book in one statement
    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Option<Book>>;

    /// Remove a book, returning the row as it was before deletion
    async fn delete(&self, id: i32) -> AppResult<Option<Book>>;
}
