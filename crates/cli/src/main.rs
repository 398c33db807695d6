//! Readmark CLI - terminal reading progress tracker.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use readmark_core::{Book, BookId};
use readmark_progress::{
    average_daily_pace, build_daily_series, completion_date, predict_completion, progress_percent,
    record_reading, todays_reading,
};
use readmark_storage::{JsonStorage, Storage};
use tracing::Level;

#[derive(Parser)]
#[command(name = "readmark")]
#[command(about = "Track reading progress from the terminal", long_about = None)]
struct Cli {
    /// Data directory for the book collection
    #[arg(long, default_value = ".readmark")]
    data_dir: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new book
    Add {
        /// Book title
        title: String,
        /// Author name
        #[arg(long)]
        author: String,
        /// Total page count
        #[arg(long)]
        pages: u32,
        /// Starting page for a book already in progress
        #[arg(long, default_value = "0")]
        current_page: u32,
    },
    /// List books with progress
    List,
    /// Show book details, forecasts, and the daily chart
    Show {
        /// Book ID
        id: String,
        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Log pages read
    Log {
        /// Book ID
        id: String,
        /// Pages read
        pages: u32,
        /// Date to log on (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a book
    Delete {
        /// Book ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let mut storage = JsonStorage::new(&cli.data_dir).await?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Add {
            title,
            author,
            pages,
            current_page,
        } => {
            let book = Book::new(title, author, pages, current_page, chrono::Utc::now())?;
            storage.save_book(&book).await?;
            println!("Added book: {} - {} by {}", book.id, book.title, book.author);
        }
        Commands::List => {
            let books = storage.list_books().await?;
            if books.is_empty() {
                println!("No books yet. Add one with `readmark add`.");
                return Ok(());
            }

            println!("Books ({})", books.len());
            for book in &books {
                print_book_card(book, today);
            }
        }
        Commands::Show { id, json } => {
            let book_id = parse_id(&id)?;
            let Some(book) = storage.load_book(book_id).await? else {
                println!("Book not found");
                return Ok(());
            };
            if json {
                print_json(&book, today)?;
            } else {
                print_book_detail(&book, today);
            }
        }
        Commands::Log { id, pages, date } => {
            let book_id = parse_id(&id)?;
            let Some(book) = storage.load_book(book_id).await? else {
                println!("Book not found");
                return Ok(());
            };

            let date = date.unwrap_or(today);
            book.validate_log_date(date)?;

            let updated = record_reading(&book, date, pages);
            storage.save_book(&updated).await?;

            println!(
                "Logged {} pages of {} on {} ({} that day, page {} of {})",
                pages,
                updated.title,
                date,
                todays_reading(&updated, date),
                updated.current_page,
                updated.total_pages,
            );
            if updated.is_finished() {
                println!("Finished {}!", updated.title);
            }
        }
        Commands::Delete { id } => {
            let book_id = parse_id(&id)?;
            storage.delete_book(book_id).await?;
            println!("Deleted book {}", book_id);
        }
    }

    Ok(())
}

fn parse_id(s: &str) -> Result<BookId> {
    s.parse().map_err(|_| anyhow::anyhow!("Invalid book ID"))
}

fn render_bar(percent: f32, width: usize) -> String {
    let filled = (((percent / 100.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn print_book_card(book: &Book, today: NaiveDate) {
    let percent = progress_percent(book);
    println!("  {} | {} by {}", book.id, book.title, book.author);
    println!(
        "    {} {:.1}% ({} / {} pages)",
        render_bar(percent, 20),
        percent,
        book.current_page,
        book.total_pages,
    );

    let todays = todays_reading(book, today);
    if todays > 0 {
        println!("    Today: {} pages", todays);
    }

    let forecast = predict_completion(book, today);
    if let Some(days) = forecast.historical_days {
        println!("    ~{} days at the average pace", days);
    }
    if let Some(days) = forecast.current_pace_days {
        println!("    ~{} days at today's pace", days);
    }
}

fn print_book_detail(book: &Book, today: NaiveDate) {
    let percent = progress_percent(book);
    println!("{} by {}", book.title, book.author);
    println!("  ID: {}", book.id);
    println!("  Started: {}", book.start_date());
    println!(
        "  {} {:.1}% complete, {} pages remaining",
        render_bar(percent, 30),
        percent,
        book.remaining_pages(),
    );

    let pace = average_daily_pace(book);
    if pace > 0.0 {
        println!("  Average: {:.1} pages/day", pace);
    }
    let todays = todays_reading(book, today);
    if todays > 0 {
        println!("  Today: {} pages", todays);
    }

    let forecast = predict_completion(book, today);
    if book.is_finished() {
        println!();
        println!("Finished.");
    } else if !forecast.is_empty() {
        println!();
        println!("Completion forecast");
        if let (Some(days), Some(date)) = (
            forecast.historical_days,
            completion_date(forecast.historical_days, today),
        ) {
            println!(
                "  Average pace: {} days ({})",
                days,
                date.format("%A, %B %d, %Y"),
            );
        }
        if let (Some(days), Some(date)) = (
            forecast.current_pace_days,
            completion_date(forecast.current_pace_days, today),
        ) {
            println!(
                "  Today's pace: {} days ({})",
                days,
                date.format("%A, %B %d, %Y"),
            );
        }
    }

    let series = build_daily_series(book, today);
    if !series.is_empty() {
        println!();
        println!("Daily reading");
        let max = series.iter().map(|e| e.pages).max().unwrap_or(0);
        for entry in &series {
            let width = if max == 0 {
                0
            } else {
                entry.pages as usize * 40 / max as usize
            };
            println!("  {} | {:<40} {}", entry.date, "#".repeat(width), entry.pages);
        }
    }
}

fn print_json(book: &Book, today: NaiveDate) -> Result<()> {
    let forecast = predict_completion(book, today);
    let doc = serde_json::json!({
        "book": book,
        "progressPercent": progress_percent(book),
        "remainingPages": book.remaining_pages(),
        "todaysReading": todays_reading(book, today),
        "averageDailyPace": average_daily_pace(book),
        "forecast": forecast,
        "historicalDate": completion_date(forecast.historical_days, today),
        "currentPaceDate": completion_date(forecast.current_pace_days, today),
        "series": build_daily_series(book, today),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
