//! Book model - the unit of tracked reading progress.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::BookId;
use crate::Time;

/// A book whose reading is tracked day by day.
///
/// The serialized form uses camelCase keys and `YYYY-MM-DD` date keys;
/// this is the document shape the storage layer reads and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Page target, fixed at creation
    pub total_pages: u32,

    /// Last page reached, never past `total_pages`
    pub current_page: u32,

    /// Pages read per calendar day; an absent date means zero pages
    pub daily_readings: BTreeMap<NaiveDate, u32>,

    /// When the book was added
    pub created_at: Time,
}

impl Book {
    /// Create a book with validated inputs.
    ///
    /// `current_page` may be non-zero when picking up a book already in
    /// progress. The daily log starts empty.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        total_pages: u32,
        current_page: u32,
        created_at: Time,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        if total_pages == 0 {
            return Err(ValidationError::ZeroTotalPages);
        }
        if current_page > total_pages {
            return Err(ValidationError::PageOutOfRange {
                current: current_page,
                total: total_pages,
            });
        }

        Ok(Self {
            id: BookId::new(),
            title,
            author,
            total_pages,
            current_page,
            daily_readings: BTreeMap::new(),
            created_at,
        })
    }

    /// First day of the reading-history window.
    pub fn start_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Pages left until the last page, zero for a finished book.
    pub fn remaining_pages(&self) -> u32 {
        self.total_pages.saturating_sub(self.current_page)
    }

    /// Whether the last page has been reached.
    pub fn is_finished(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Check a log date against the reading-history window.
    pub fn validate_log_date(&self, date: NaiveDate) -> Result<(), ValidationError> {
        let start = self.start_date();
        if date < start {
            return Err(ValidationError::DateBeforeStart { date, start });
        }
        Ok(())
    }
}
