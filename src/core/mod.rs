pub mod catalog;

pub use crate::domain::model::{Book, BookRecord, BookView, BorrowOutcome, ReturnOutcome};
pub use crate::domain::ports::SeedSource;
pub use crate::utils::error::Result;
