//! Reading progress derivations.
//!
//! Pure functions over a single book record: progress percentages, pace
//! averages, completion forecasts, and the day-by-day reading series.
//! "Today" is always an explicit parameter, never the wall clock.

#![warn(missing_docs)]

pub mod engine;
pub mod estimator;
pub mod series;

pub use engine::{average_daily_pace, progress_percent, record_reading, todays_reading};
pub use estimator::{completion_date, predict_completion, CompletionForecast};
pub use series::{build_daily_series, DailyEntry};
