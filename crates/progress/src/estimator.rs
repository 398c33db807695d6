//! Completion date estimation.

use chrono::{Duration, NaiveDate};
use readmark_core::Book;
use serde::Serialize;

use crate::engine::{average_daily_pace, todays_reading};

/// Days-to-finish forecasts under the two supported pace assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionForecast {
    /// Days left at the historical average pace
    pub historical_days: Option<u32>,

    /// Days left at today's pace
    pub current_pace_days: Option<u32>,
}

impl CompletionForecast {
    /// Whether neither pace assumption yields a forecast.
    pub fn is_empty(&self) -> bool {
        self.historical_days.is_none() && self.current_pace_days.is_none()
    }
}

/// Forecast how many days of reading remain.
///
/// A finished book (no remaining pages) forecasts `None` on both fields.
/// Each field is `None` when its pace is zero - no history, or nothing
/// logged today. Day counts round up: a partial day of remaining pages
/// still takes a day.
pub fn predict_completion(book: &Book, today: NaiveDate) -> CompletionForecast {
    let remaining = book.remaining_pages();
    if remaining == 0 {
        return CompletionForecast {
            historical_days: None,
            current_pace_days: None,
        };
    }

    let pace = average_daily_pace(book);
    let historical_days = if pace > 0.0 {
        Some((f64::from(remaining) / pace).ceil() as u32)
    } else {
        None
    };

    let todays = todays_reading(book, today);
    let current_pace_days = if todays > 0 {
        Some(remaining.div_ceil(todays))
    } else {
        None
    };

    CompletionForecast {
        historical_days,
        current_pace_days,
    }
}

/// Calendar date `days` days after `today`, `None` when there is no
/// forecast to project.
pub fn completion_date(days: Option<u32>, today: NaiveDate) -> Option<NaiveDate> {
    days.map(|d| today + Duration::days(i64::from(d)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::record_reading;
    use chrono::TimeZone;

    fn book(total_pages: u32, current_page: u32) -> Book {
        let created_at = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Book::new("Test Book", "Test Author", total_pages, current_page, created_at).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_finished_book_has_no_forecast() {
        let finished = record_reading(&book(300, 290), date("2024-01-02"), 10);
        let forecast = predict_completion(&finished, date("2024-01-02"));
        assert!(forecast.is_empty());
    }

    #[test]
    fn test_empty_history_has_no_historical_forecast() {
        let forecast = predict_completion(&book(300, 0), date("2024-01-02"));
        assert_eq!(forecast.historical_days, None);
        assert_eq!(forecast.current_pace_days, None);
    }

    #[test]
    fn test_day_counts_round_up() {
        // 11 pages remaining at 5 pages per day is 3 days, not 2
        let b = record_reading(&book(16, 0), date("2024-01-02"), 5);
        let forecast = predict_completion(&b, date("2024-01-03"));
        assert_eq!(forecast.historical_days, Some(3));
        // nothing logged on the query day
        assert_eq!(forecast.current_pace_days, None);
    }

    #[test]
    fn test_two_day_scenario_forecasts_both_paces() {
        let b = record_reading(&book(300, 0), date("2024-01-02"), 50);
        let b = record_reading(&b, date("2024-01-03"), 60);
        // pace (50+60)/2 = 55, remaining 190
        let forecast = predict_completion(&b, date("2024-01-03"));
        assert_eq!(forecast.historical_days, Some(4));
        assert_eq!(forecast.current_pace_days, Some(4));
    }

    #[test]
    fn test_exact_division_is_not_rounded_up() {
        let b = record_reading(&book(100, 0), date("2024-01-02"), 20);
        let forecast = predict_completion(&b, date("2024-01-02"));
        // 80 remaining at 20 per day
        assert_eq!(forecast.historical_days, Some(4));
        assert_eq!(forecast.current_pace_days, Some(4));
    }

    #[test]
    fn test_completion_date_projects_calendar_days() {
        let today = date("2024-01-03");
        assert_eq!(completion_date(Some(4), today), Some(date("2024-01-07")));
        assert_eq!(completion_date(None, today), None);
    }

    #[test]
    fn test_completion_date_crosses_month_boundary() {
        let today = date("2024-01-30");
        assert_eq!(completion_date(Some(3), today), Some(date("2024-02-02")));
    }
}
