use crate::utils::error::{CatalogError, Result};

/// ISBN 允許的長度（字元數）
pub const ISBN_LENGTHS: [usize; 2] = [10, 13];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 只檢查長度，不檢查數字內容或檢查碼
pub fn validate_isbn(value: &str) -> Result<()> {
    let length = value.chars().count();
    if ISBN_LENGTHS.contains(&length) {
        Ok(())
    } else {
        Err(CatalogError::invalid_identifier(value))
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_isbn_length_boundary() {
        let cases = [
            ("123456789", false),
            ("1234567890", true),
            ("12345678901", false),
            ("123456789012", false),
            ("1234567890123", true),
            ("12345678901234", false),
        ];
        for (isbn, ok) in cases {
            assert_eq!(validate_isbn(isbn).is_ok(), ok, "isbn {}", isbn);
        }
    }

    #[test]
    fn test_validate_isbn_ignores_content() {
        assert!(validate_isbn("ABCDEFGHIJ").is_ok());
        assert!(validate_isbn("978-0-06-0").is_ok());
        assert!(validate_isbn("").is_err());
        assert!(validate_isbn("INVALID_ISBN").is_err());
    }

    #[test]
    fn test_validate_isbn_counts_characters_not_bytes() {
        // 10 個字元，但超過 10 個位元組
        assert!(validate_isbn("ééééééééé1").is_ok());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "./catalog.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("books", 5, 1).is_ok());
        assert!(validate_positive_number("books", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let absent: Option<i32> = None;
        assert_eq!(*validate_required_field("x", &present).unwrap(), 3);
        assert!(validate_required_field("x", &absent).is_err());
    }
}
