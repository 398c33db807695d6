//! Day-by-day reading series for display.

use chrono::NaiveDate;
use readmark_core::Book;
use serde::Serialize;

/// Pages read on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    /// The day
    pub date: NaiveDate,

    /// Pages logged on that day, zero when none were
    pub pages: u32,
}

/// Per-day reading counts from the book's start date through `today`,
/// inclusive and in chronological order.
///
/// Days without a log entry are filled with zero, so the series always
/// spans the whole history window. Regenerable: the same book and
/// `today` always produce the identical sequence. Empty when `today`
/// precedes the start date.
pub fn build_daily_series(book: &Book, today: NaiveDate) -> Vec<DailyEntry> {
    let mut series = Vec::new();
    let mut day = book.start_date();
    while day <= today {
        let pages = book.daily_readings.get(&day).copied().unwrap_or(0);
        series.push(DailyEntry { date: day, pages });
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    series
}
