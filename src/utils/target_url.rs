//! Target URL validation.
//!
//! A target must parse as an absolute URI. It is stored exactly as submitted
//! (minus surrounding whitespace), so the redirect goes where the client asked.
//! The stored value ends up verbatim in the `Location` header, so control
//! characters inside it are rejected even though [`Url::parse`] would drop them.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must not contain control characters")]
    ControlCharacter,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Checks that `input` is a well-formed absolute URI.
///
/// Relative references such as `/path` or `example.com` are rejected because
/// [`Url::parse`] requires a scheme.
///
/// # Errors
///
/// Returns [`TargetUrlError::Empty`] for blank input,
/// [`TargetUrlError::ControlCharacter`] for embedded tabs, newlines and other
/// control characters, and [`TargetUrlError::InvalidFormat`] when parsing fails.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_target_url(" https://example.com ").unwrap(), "https://example.com");
/// assert!(validate_target_url("not-a-url").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<String, TargetUrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TargetUrlError::Empty);
    }
    if trimmed.chars().any(char::is_control) {
        return Err(TargetUrlError::ControlCharacter);
    }

    Url::parse(trimmed)?;

    Ok(trimmed.to_string())
}
