pub mod builtin;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "library-catalog")]
#[command(about = "Borrow, return and list books in a small in-memory catalog")]
pub struct CliConfig {
    /// Path to a TOML catalog file (defaults to the built-in collection)
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Keep the catalog in load order instead of sorting by ISBN")]
    pub no_sort: bool,

    #[arg(long, help = "Print the catalog and exit without the menu")]
    pub list: bool,

    #[arg(long, requires = "list", help = "With --list, print the catalog as JSON")]
    pub json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_json_requires_list() {
        assert!(CliConfig::try_parse_from(["library-catalog", "--json"]).is_err());

        let config = CliConfig::try_parse_from(["library-catalog", "--list", "--json"]).unwrap();
        assert!(config.list && config.json);
    }
}
