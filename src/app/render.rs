use crate::domain::model::{BookView, BorrowOutcome, ReturnOutcome};
use crate::utils::error::Result;

pub const SORTED_NOTICE: &str = "Books have been sorted by ISBN.";

pub fn borrow_message(outcome: BorrowOutcome, isbn: &str) -> String {
    match outcome {
        BorrowOutcome::Borrowed => "Book borrowed successfully.".to_string(),
        BorrowOutcome::AlreadyBorrowed => "Book is already borrowed.".to_string(),
        BorrowOutcome::NotFound => not_found_message(isbn),
    }
}

pub fn return_message(outcome: ReturnOutcome, isbn: &str) -> String {
    match outcome {
        ReturnOutcome::Returned => "Book returned successfully.".to_string(),
        ReturnOutcome::WasNotBorrowed => "Error: Book was not borrowed.".to_string(),
        ReturnOutcome::NotFound => not_found_message(isbn),
    }
}

fn not_found_message(isbn: &str) -> String {
    format!("Error: Book with ISBN {} not found.", isbn)
}

/// 每本書之後空一行
pub fn render_listing(views: &[BookView]) -> String {
    views.iter().map(|view| format!("{}\n", view)).collect()
}

pub fn render_listing_json(views: &[BookView]) -> Result<String> {
    Ok(serde_json::to_string_pretty(views)?)
}
