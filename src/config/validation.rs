//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Minimum length for a bearer token.
const MIN_TOKEN_LENGTH: usize = 50;

/// Maximum username length.
const MAX_USERNAME_LENGTH: usize = 15;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_token(&config.my_account.bearer_token)?;
    validate_usernames(&config.targeted_user.usernames)?;

    Ok(())
}

/// Validate the bearer token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::MissingConfig(
            "bearer_token (set it in config.toml or the BEARER_TOKEN environment variable)"
                .to_string(),
        ));
    }

    if token.len() < MIN_TOKEN_LENGTH {
        return Err(Error::ConfigValidation {
            field: "bearer_token".to_string(),
            message: format!(
                "Token must be at least {} characters (got {})",
                MIN_TOKEN_LENGTH,
                token.len()
            ),
        });
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "bearer_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your actual bearer token."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate usernames.
pub fn validate_usernames<S: AsRef<str>, I: IntoIterator<Item = S>>(usernames: I) -> Result<()> {
    let usernames: Vec<_> = usernames.into_iter().collect();

    if usernames.is_empty() {
        return Err(Error::MissingConfig(
            "usernames (at least one username required)".to_string(),
        ));
    }

    // Username pattern: 1-15 chars, alphanumeric and underscores
    let username_pattern = Regex::new(r"^[a-zA-Z0-9_]{1,15}$").unwrap();

    for username in usernames {
        let username = username.as_ref();

        // Remove leading @ if present
        let clean_username = username.trim_start_matches('@');

        if clean_username.is_empty() {
            return Err(Error::ConfigValidation {
                field: "usernames".to_string(),
                message: "Username cannot be empty".to_string(),
            });
        }

        if clean_username.len() > MAX_USERNAME_LENGTH {
            return Err(Error::ConfigValidation {
                field: "usernames".to_string(),
                message: format!(
                    "Username '{}' is too long (maximum {} characters)",
                    username, MAX_USERNAME_LENGTH
                ),
            });
        }

        if !username_pattern.is_match(clean_username) {
            return Err(Error::ConfigValidation {
                field: "usernames".to_string(),
                message: format!(
                    "Username '{}' contains invalid characters. Only alphanumeric and underscores allowed.",
                    username
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_usernames(["valid_user123"]).is_ok());
        assert!(validate_usernames(["a"]).is_ok());
        assert!(validate_usernames(["@with_at_sign"]).is_ok());
    }

    #[test]
    fn test_invalid_username_too_long() {
        assert!(validate_usernames(["this_name_is_far_too_long"]).is_err());
    }

    #[test]
    fn test_invalid_username_characters() {
        assert!(validate_usernames(["no-hyphens"]).is_err());
        assert!(validate_usernames(["no spaces"]).is_err());
        assert!(validate_usernames(["@"]).is_err());
    }

    #[test]
    fn test_no_usernames() {
        assert!(validate_usernames(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_token_too_short() {
        assert!(validate_token("short").is_err());
    }

    #[test]
    fn test_token_empty() {
        assert!(validate_token("").is_err());
    }

    #[test]
    fn test_token_placeholder() {
        let padded = format!("{:A<60}", "your_token");
        assert!(validate_token(&padded.to_lowercase()).is_err());
    }

    #[test]
    fn test_token_valid() {
        let token = "A".repeat(100);
        assert!(validate_token(&token).is_ok());
    }
}
