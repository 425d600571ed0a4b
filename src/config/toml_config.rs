use crate::core::SeedSource;
use crate::domain::model::BookRecord;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogSection,
    #[serde(default)]
    pub books: Vec<BookRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub name: Option<String>,
    pub sort_on_load: Option<bool>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LIBRARY_NAME})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置；ISBN 在建立目錄時逐筆檢查，不在這裡
    pub fn validate_config(&self) -> Result<()> {
        let name = validate_required_field("catalog.name", &self.catalog.name)?;
        validate_non_empty_string("catalog.name", name)?;
        validate_positive_number("books", self.books.len(), 1)?;
        Ok(())
    }
}

impl SeedSource for CatalogConfig {
    fn catalog_name(&self) -> &str {
        self.catalog.name.as_deref().unwrap_or("Unnamed catalog")
    }

    fn records(&self) -> &[BookRecord] {
        &self.books
    }

    fn sort_on_load(&self) -> bool {
        self.catalog.sort_on_load.unwrap_or(true)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
