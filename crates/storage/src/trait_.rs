//! Storage trait abstraction.

use async_trait::async_trait;
use readmark_core::{Book, BookId};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Referenced book id absent from the collection
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Storage abstraction for the book collection.
///
/// This trait allows different storage backends to be plugged in. The
/// collection is keyed by [`BookId`]; callers decide when a derived
/// update is persisted.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Save a book (create or update).
    async fn save_book(&mut self, book: &Book) -> Result<()>;

    /// Load a book by ID.
    async fn load_book(&self, id: BookId) -> Result<Option<Book>>;

    /// List all books, ordered by creation time.
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// Delete a book. Unknown ids are reported as [`StorageError::NotFound`].
    async fn delete_book(&mut self, id: BookId) -> Result<()>;
}
