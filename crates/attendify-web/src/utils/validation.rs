/// Validation utilities for the sign-in form

use crate::types::ValidationError;

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError {
            field: "name".to_string(),
            message: "Name is required".to_string(),
        });
    }

    if trimmed.len() > 80 {
        return Err(ValidationError {
            field: "name".to_string(),
            message: "Name cannot exceed 80 characters".to_string(),
        });
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError {
            field: "email".to_string(),
            message: "Email is required".to_string(),
        });
    }

    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError {
            field: "email".to_string(),
            message: "Invalid email format".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_email("ada@example.edu").is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = validate_name("   ").unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let long = "x".repeat(81);
        assert!(validate_name(&long).is_err());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        assert_eq!(validate_email("").unwrap_err().field, "email");
        assert!(validate_email("ada.example.edu").is_err());
        assert!(validate_email("ada@edu").is_err());
    }
}
