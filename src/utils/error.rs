use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid ISBN format: '{identifier}' has {length} characters (expected 10 or 13)")]
    InvalidIdentifier { identifier: String, length: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn invalid_identifier(identifier: &str) -> Self {
        CatalogError::InvalidIdentifier {
            identifier: identifier.to_string(),
            length: identifier.chars().count(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::InvalidIdentifier { .. } => ErrorCategory::Input,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::IoError(_) | CatalogError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// 嚴重程度：輸入錯誤可重試，不影響其他紀錄
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::InvalidIdentifier { .. } => ErrorSeverity::Low,
            CatalogError::SerializationError(_) => ErrorSeverity::Medium,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorSeverity::High,
            CatalogError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::InvalidIdentifier { identifier, .. } => {
                format!("Invalid ISBN format: {}", identifier)
            }
            CatalogError::IoError(e) => format!("Could not read or write a file: {}", e),
            CatalogError::SerializationError(e) => format!("Could not render output: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for {} is invalid: {}", field, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Configuration is missing {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::InvalidIdentifier { .. } => {
                "Use an ISBN with exactly 10 or 13 characters"
            }
            CatalogError::IoError(_) => "Check that the file exists and is readable",
            CatalogError::SerializationError(_) => "Try the plain text listing instead of --json",
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => {
                "Fix the catalog TOML file and run again"
            }
        }
    }

    /// 依嚴重程度決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_counts_characters() {
        let err = CatalogError::invalid_identifier("INVALID_ISBN");
        match &err {
            CatalogError::InvalidIdentifier { identifier, length } => {
                assert_eq!(identifier, "INVALID_ISBN");
                assert_eq!(*length, 12);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = CatalogError::MissingConfigError {
            field: "books".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("books"));
    }
}
