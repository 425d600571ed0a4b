use anyhow::Result;
use library_catalog::utils::validation::Validate;
use library_catalog::{BorrowOutcome, Catalog, CatalogConfig, CatalogError, SeedSource};
use tempfile::TempDir;

#[test]
fn test_catalog_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("catalog.toml");

    let config_content = r#"
[catalog]
name = "Test branch"

[[books]]
title = "Book C"
author = "Author Z"
isbn = "3333333333"
date_added = "2024-03-01"

[[books]]
title = "Invalid Book"
author = "Author X"
isbn = "INVALID_ISBN"

[[books]]
title = "Book A"
author = "Author X"
isbn = "1111111111"
available = false
date_added = "2024-01-01"
"#;
    std::fs::write(&config_path, config_content)?;

    let config = CatalogConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.catalog_name(), "Test branch");

    let (mut catalog, rejected) = Catalog::from_seed(&config);

    assert_eq!(rejected.len(), 1);
    assert!(matches!(
        &rejected[0],
        CatalogError::InvalidIdentifier { identifier, .. } if identifier == "INVALID_ISBN"
    ));

    let ids: Vec<&str> = catalog.iter().map(|b| b.identifier()).collect();
    assert_eq!(ids, vec!["1111111111", "3333333333"]);
    assert_eq!(catalog.find("3333333333").unwrap().date_added(), "2024-03-01");

    assert_eq!(
        catalog.borrow_by_identifier("1111111111"),
        BorrowOutcome::AlreadyBorrowed
    );
    Ok(())
}

#[test]
fn test_sort_on_load_can_be_disabled() -> Result<()> {
    let config = CatalogConfig::from_toml_str(
        r#"
[catalog]
name = "Unsorted"
sort_on_load = false

[[books]]
title = "Book B"
author = "Author Y"
isbn = "2222222222"

[[books]]
title = "Book A"
author = "Author X"
isbn = "1111111111"
"#,
    )?;

    let (catalog, _) = Catalog::from_seed(&config);
    let ids: Vec<&str> = catalog.iter().map(|b| b.identifier()).collect();
    assert_eq!(ids, vec!["2222222222", "1111111111"]);
    Ok(())
}

#[test]
fn test_config_without_books_fails_validation() -> Result<()> {
    let config = CatalogConfig::from_toml_str("[catalog]\nname = \"Empty\"\n")?;
    let err = config.validate().unwrap_err();

    assert!(matches!(err, CatalogError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}
