//! Field Validation
//!
//! Write-time validation shared by the user and card handlers, mirroring
//! the store schema: bounded text fields, HTTP(S) URLs, email shape.
//! Violations map to `BadRequest`.

use url::Url;

use crate::backend::error::ApiError;

const TEXT_MIN: usize = 2;
const TEXT_MAX: usize = 30;

/// Validate a bounded text field (name, about, card title): 2-30 chars
pub fn validate_text(field: &str, value: &str) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < TEXT_MIN || len > TEXT_MAX {
        return Err(ApiError::bad_request(format!(
            "field '{field}' must be between {TEXT_MIN} and {TEXT_MAX} characters"
        )));
    }
    Ok(())
}

/// Validate an avatar or card link as an absolute HTTP(S) URL
pub fn validate_url(field: &str, value: &str) -> Result<(), ApiError> {
    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);
    if !valid {
        return Err(ApiError::bad_request(format!(
            "field '{field}' must be a valid http(s) URL"
        )));
    }
    Ok(())
}

/// Validate email shape: `local@domain.tld`, no whitespace
pub fn validate_email(value: &str) -> Result<(), ApiError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(ApiError::bad_request("invalid email address"));
    }
    Ok(())
}

/// Validate a signup/signin password: present and non-empty
pub fn validate_password(value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::bad_request("password must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bounds() {
        assert!(validate_text("name", "ab").is_ok());
        assert!(validate_text("name", &"x".repeat(30)).is_ok());
        assert!(validate_text("name", "a").is_err());
        assert!(validate_text("name", &"x".repeat(31)).is_err());
        assert!(validate_text("name", "").is_err());
    }

    #[test]
    fn test_text_counts_chars_not_bytes() {
        // 2 chars, 8 bytes
        assert!(validate_text("name", "\u{1F30A}\u{1F30A}").is_ok());
    }

    #[test]
    fn test_url_accepts_http_and_https() {
        assert!(validate_url("avatar", "https://example.com/pic.png").is_ok());
        assert!(validate_url("avatar", "http://example.com").is_ok());
    }

    #[test]
    fn test_url_rejects_other_shapes() {
        assert!(validate_url("avatar", "ftp://example.com/pic.png").is_err());
        assert!(validate_url("avatar", "not a url").is_err());
        assert!(validate_url("avatar", "/relative/path.png").is_err());
        assert!(validate_url("avatar", "").is_err());
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("u.ser+tag@sub.example.com").is_ok());
        assert!(validate_email("userexample.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user @example.com").is_err());
    }

    #[test]
    fn test_password_presence() {
        assert!(validate_password("p").is_ok());
        assert!(validate_password("").is_err());
    }
}
