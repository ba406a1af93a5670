use crate::utils::error::{PersonError, Result};

/// 一次執行中同一步驟最多重複的次數
pub const MAX_TIMES: usize = 1000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PersonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PersonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PersonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(PersonError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PersonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_times(field_name: &str, times: usize) -> Result<()> {
    validate_range(field_name, times, 1, MAX_TIMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("script", "greeting.toml").is_ok());
        assert!(validate_path("script", "").is_err());
        assert!(validate_path("script", "bad\0name.toml").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("steps[0].person", "guido").is_ok());
        assert!(validate_non_empty_string("steps[0].person", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("steps", &[1]).is_ok());
        let err = validate_non_empty_list::<u8>("steps", &[]).unwrap_err();
        assert!(matches!(err, PersonError::MissingConfigError { field } if field == "steps"));
    }

    #[test]
    fn test_validate_times() {
        assert!(validate_times("times", 1).is_ok());
        assert!(validate_times("times", MAX_TIMES).is_ok());
        assert!(validate_times("times", 0).is_err());
        assert!(validate_times("times", MAX_TIMES + 1).is_err());
    }
}
