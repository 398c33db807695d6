//! Validation errors raised at the record boundary.

use chrono::NaiveDate;

/// Errors for malformed book input.
///
/// These are raised when a record is created or when a log date is
/// checked against the record, never by the progress derivations, which
/// assume well-formed books.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title is empty or whitespace
    #[error("title must not be empty")]
    EmptyTitle,

    /// Author is empty or whitespace
    #[error("author must not be empty")]
    EmptyAuthor,

    /// Page target is zero
    #[error("total pages must be positive")]
    ZeroTotalPages,

    /// Starting page is past the last page
    #[error("current page {current} is past the last page {total}")]
    PageOutOfRange {
        /// Requested starting page
        current: u32,
        /// The book's page target
        total: u32,
    },

    /// Log date precedes the book's start date
    #[error("reading date {date} is before the book was added ({start})")]
    DateBeforeStart {
        /// Rejected log date
        date: NaiveDate,
        /// The book's start date
        start: NaiveDate,
    },
}
