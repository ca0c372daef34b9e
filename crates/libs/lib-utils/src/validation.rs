//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
///
/// Whitespace counts as content: a password of spaces is a password.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that every character is alphanumeric or in `extra`.
pub fn validate_allowed_chars(value: &str, extra: &[char], field_name: &str) -> Result<(), String> {
    match value
        .chars()
        .find(|c| !(c.is_alphanumeric() || extra.contains(c)))
    {
        Some(c) => Err(format!("{} contains invalid character '{}'", field_name, c)),
        None => Ok(()),
    }
}

/// Validate that two values are identical.
pub fn validate_matches(value: &str, expected: &str, field_name: &str) -> Result<(), String> {
    if value == expected {
        Ok(())
    } else {
        Err(format!("{} does not match", field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("x", "Name").is_ok());
        assert!(validate_not_empty(" ", "Name").is_ok());
        assert_eq!(validate_not_empty("", "Name"), Err("Name cannot be empty".to_string()));
    }

    #[test]
    fn test_validate_allowed_chars() {
        assert!(validate_allowed_chars("test_wallet21", &['_', '-'], "Name").is_ok());
        assert_eq!(
            validate_allowed_chars("wallet!", &['_', '-'], "Name"),
            Err("Name contains invalid character '!'".to_string())
        );
        assert!(validate_allowed_chars("a b", &[], "Name").is_err());
    }

    #[test]
    fn test_validate_matches() {
        assert!(validate_matches("abc", "abc", "Password").is_ok());
        assert!(validate_matches("abc", "abd", "Password").is_err());
    }
}
