use crate::utils::error::{Result, SantaError};

/// Delimiters of the persisted master list line format.
const MASTER_LIST_DELIMITERS: [&str; 4] = [",", " : ", "\n", "\r"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.chars().any(char::is_whitespace) {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "E-mail address cannot contain whitespace".to_string(),
        });
    }

    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not an e-mail address".to_string(),
        }),
    }
}

/// Names and e-mails are written verbatim into the master list, so they may
/// not contain its separators.
pub fn validate_master_list_field(field_name: &str, value: &str) -> Result<()> {
    if let Some(delimiter) = MASTER_LIST_DELIMITERS
        .iter()
        .find(|delimiter| value.contains(**delimiter))
    {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value cannot contain {:?}", delimiter),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("draw.max_attempts", 5, 1).is_ok());
        assert!(validate_positive_number("draw.max_attempts", 0, 1).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("participants.Jan", "jan@example.com").is_ok());
        assert!(validate_email("participants.Jan", "").is_err());
        assert!(validate_email("participants.Jan", "jan.example.com").is_err());
        assert!(validate_email("participants.Jan", "@example.com").is_err());
        assert!(validate_email("participants.Jan", "a@x :").is_err());
        assert!(validate_email("participants.Jan", " jan@example.com").is_err());
    }

    #[test]
    fn test_validate_master_list_field() {
        assert!(validate_master_list_field("participants", "Pierre").is_ok());
        assert!(validate_master_list_field("participants", "Doe, Jane").is_err());
        assert!(validate_master_list_field("participants", "a : b").is_err());
        assert!(validate_master_list_field("participants", "two\nlines").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.master_list", "list.txt").is_ok());
        assert!(validate_path("storage.master_list", "").is_err());
    }
}
