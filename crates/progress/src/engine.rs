//! Core progress derivations over a single book.

use chrono::NaiveDate;
use readmark_core::Book;

/// Completed share of the book as a percentage, clamped to 100.
///
/// The clamp holds even if `current_page` has drifted past
/// `total_pages` through an external edit of the stored document.
pub fn progress_percent(book: &Book) -> f32 {
    ((book.current_page as f32 / book.total_pages as f32) * 100.0).min(100.0)
}

/// Pages logged on `today`, zero when nothing was logged.
pub fn todays_reading(book: &Book, today: NaiveDate) -> u32 {
    book.daily_readings.get(&today).copied().unwrap_or(0)
}

/// Mean pages per day across days with a positive entry.
///
/// Days with a zero or missing entry count neither toward the sum nor
/// the divisor. Returns 0.0 when no positive entries exist.
pub fn average_daily_pace(book: &Book) -> f64 {
    let mut sum: u64 = 0;
    let mut days: u32 = 0;
    for &pages in book.daily_readings.values() {
        if pages > 0 {
            sum += u64::from(pages);
            days += 1;
        }
    }
    if days == 0 {
        0.0
    } else {
        sum as f64 / f64::from(days)
    }
}

/// Log `pages` read on `today`, returning the updated book.
///
/// Entries on the same day accumulate, and `current_page` advances by
/// the same amount, capped at `total_pages`. The input book is left
/// unchanged.
pub fn record_reading(book: &Book, today: NaiveDate, pages: u32) -> Book {
    let mut updated = book.clone();
    let entry = updated.daily_readings.entry(today).or_insert(0);
    *entry = entry.saturating_add(pages);
    updated.current_page = book
        .current_page
        .saturating_add(pages)
        .min(book.total_pages);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn book(total_pages: u32, current_page: u32) -> Book {
        let created_at = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Book::new("Test Book", "Test Author", total_pages, current_page, created_at).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_progress_percent_of_new_book_is_zero() {
        assert_eq!(progress_percent(&book(300, 0)), 0.0);
    }

    #[test]
    fn test_progress_percent_after_first_log() {
        let updated = record_reading(&book(300, 0), date("2024-01-02"), 50);
        assert_eq!(updated.current_page, 50);
        assert_eq!(updated.daily_readings[&date("2024-01-02")], 50);
        assert!((progress_percent(&updated) - 16.67).abs() < 0.01);
    }

    #[test]
    fn test_progress_percent_clamps_at_100() {
        let mut over = book(300, 300);
        over.current_page = 400; // external data error
        assert_eq!(progress_percent(&over), 100.0);
    }

    #[test]
    fn test_progress_percent_stays_in_bounds() {
        for current in [0, 1, 150, 299, 300] {
            let p = progress_percent(&book(300, current));
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    fn test_todays_reading_defaults_to_zero() {
        assert_eq!(todays_reading(&book(300, 0), date("2024-01-02")), 0);
    }

    #[test]
    fn test_record_reading_accumulates_same_day_entries() {
        let day = date("2024-01-02");
        let first = record_reading(&book(300, 0), day, 20);
        let second = record_reading(&first, day, 30);
        assert_eq!(second.daily_readings[&day], 50);
        assert_eq!(second.current_page, 50);
        assert_eq!(todays_reading(&second, day), 50);
    }

    #[test]
    fn test_record_reading_caps_current_page_at_total() {
        let updated = record_reading(&book(300, 290), date("2024-01-02"), 50);
        assert_eq!(updated.current_page, 300);
        // the daily log still records the full amount read
        assert_eq!(updated.daily_readings[&date("2024-01-02")], 50);
    }

    #[test]
    fn test_record_reading_leaves_input_unchanged() {
        let original = book(300, 0);
        let _updated = record_reading(&original, date("2024-01-02"), 50);
        assert_eq!(original.current_page, 0);
        assert!(original.daily_readings.is_empty());
    }

    #[test]
    fn test_record_reading_of_zero_pages_keeps_pace_unaffected() {
        let updated = record_reading(&book(300, 0), date("2024-01-02"), 0);
        assert_eq!(updated.current_page, 0);
        assert_eq!(updated.daily_readings[&date("2024-01-02")], 0);
        assert_eq!(average_daily_pace(&updated), 0.0);
    }

    #[test]
    fn test_average_daily_pace_ignores_zero_days() {
        let mut with_zero = record_reading(&book(300, 0), date("2024-01-02"), 10);
        with_zero.daily_readings.insert(date("2024-01-03"), 0);
        let without_zero = record_reading(&book(300, 0), date("2024-01-02"), 10);
        assert_eq!(average_daily_pace(&with_zero), 10.0);
        assert_eq!(
            average_daily_pace(&with_zero),
            average_daily_pace(&without_zero)
        );
    }

    #[test]
    fn test_average_daily_pace_of_empty_log_is_zero() {
        assert_eq!(average_daily_pace(&book(300, 0)), 0.0);
    }

    #[test]
    fn test_average_daily_pace_means_positive_days() {
        let b = record_reading(&book(300, 0), date("2024-01-02"), 50);
        let b = record_reading(&b, date("2024-01-03"), 60);
        assert_eq!(average_daily_pace(&b), 55.0);
    }
}
