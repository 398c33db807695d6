//! JSON file storage implementation.
//!
//! Stores one pretty-printed JSON document per book under a
//! `books/` subdirectory of the storage root.

use std::path::Path;

use readmark_core::{Book, BookId};
use tokio::fs;
use tracing::debug;

use super::{Result, Storage, StorageError};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: std::path::PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory layout if
    /// it does not exist yet.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("books")).await?;
        Ok(Self { root })
    }

    fn book_path(&self, id: BookId) -> std::path::PathBuf {
        self.root.join("books").join(format!("{}.json", id))
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_book(&mut self, book: &Book) -> Result<()> {
        let path = self.book_path(book.id);
        let json = serde_json::to_string_pretty(book)?;
        fs::write(&path, json.as_bytes()).await?;
        debug!(id = %book.id, "saved book");
        Ok(())
    }

    async fn load_book(&self, id: BookId) -> Result<Option<Book>> {
        read_json(&self.book_path(id)).await
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let mut books: Vec<Book> = list_dir(&self.root.join("books")).await?;
        books.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(books)
    }

    async fn delete_book(&mut self, id: BookId) -> Result<()> {
        match fs::remove_file(self.book_path(id)).await {
            Ok(()) => {
                debug!(id = %id, "deleted book");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &std::path::Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if let Ok(Some(item)) = read_json(&entry.path()).await {
            items.push(item);
        }
    }
    Ok(items)
}
