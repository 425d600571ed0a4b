use clap::Parser;
use library_catalog::app::render;
use library_catalog::utils::{logger, validation::Validate};
use library_catalog::{BuiltinSeed, Catalog, CatalogConfig, CatalogError, CliConfig, Menu, SeedSource};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting library-catalog CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ library-catalog failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), CatalogError> {
    config.validate()?;

    let seed: Box<dyn SeedSource> = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            let toml_config = CatalogConfig::from_file(path)?;
            toml_config.validate()?;
            Box::new(toml_config)
        }
        None => Box::new(BuiltinSeed::new()),
    };

    let (mut catalog, rejected) = if config.no_sort {
        Catalog::initialize(seed.records().iter().cloned())
    } else {
        Catalog::from_seed(&*seed)
    };
    for e in &rejected {
        eprintln!("Error: {}", e.user_friendly_message());
    }

    if seed.sort_on_load() && !config.no_sort && !config.list {
        println!("{}", render::SORTED_NOTICE);
    }

    if config.list {
        let views = catalog.list_all();
        if config.json {
            println!("{}", render::render_listing_json(&views)?);
        } else {
            print!("{}", render::render_listing(&views));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut catalog, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("👋 Leaving library-catalog");
    Ok(())
}
