pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::Menu;
pub use config::{builtin::BuiltinSeed, toml_config::CatalogConfig};
pub use core::catalog::Catalog;
pub use domain::model::{Availability, Book, BookRecord, BookView, BorrowOutcome, ReturnOutcome};
pub use domain::ports::SeedSource;
pub use utils::error::{CatalogError, Result};
